use super::types::{MuxkitConfig, PluginsConfig, RawMuxkitConfig, RawPluginsConfig};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<MuxkitConfig> {
        let mut raw = RawMuxkitConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if user_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (~/.config/muxkit/config.toml)
    pub fn user_config_path() -> PathBuf {
        muxkit_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with MUXKIT_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("MUXKIT_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".muxkit/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawMuxkitConfig> {
        let contents = std::fs::read_to_string(path)?;
        let raw = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Config layer loaded");
        Ok(raw)
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawMuxkitConfig, overlay: RawMuxkitConfig) -> RawMuxkitConfig {
        RawMuxkitConfig {
            plugins: RawPluginsConfig {
                system_dir: overlay.plugins.system_dir.or(base.plugins.system_dir),
                user_dir: overlay.plugins.user_dir.or(base.plugins.user_dir),
                extra_dirs: overlay.plugins.extra_dirs.or(base.plugins.extra_dirs),
                load_system: overlay.plugins.load_system.or(base.plugins.load_system),
                load_user: overlay.plugins.load_user.or(base.plugins.load_user),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawMuxkitConfig) -> MuxkitConfig {
        let defaults = PluginsConfig::default();
        MuxkitConfig {
            plugins: PluginsConfig {
                system_dir: raw.plugins.system_dir.unwrap_or(defaults.system_dir),
                user_dir: raw.plugins.user_dir.or(defaults.user_dir),
                extra_dirs: raw.plugins.extra_dirs.unwrap_or_default(),
                load_system: raw.plugins.load_system.unwrap_or(defaults.load_system),
                load_user: raw.plugins.load_user.unwrap_or(defaults.load_user),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn raw(toml_str: &str) -> RawMuxkitConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_merge_overlay_wins_when_set() {
        let base = raw(
            r#"
[plugins]
system_dir = "/base/system"
load_user = false
"#,
        );
        let overlay = raw(
            r#"
[plugins]
system_dir = "/overlay/system"
"#,
        );

        let merged = ConfigLoader::merge_raw(base, overlay);

        assert_eq!(
            merged.plugins.system_dir,
            Some(PathBuf::from("/overlay/system"))
        );
        assert_eq!(merged.plugins.load_user, Some(false));
    }

    #[test]
    fn test_finalize_applies_defaults() {
        let config = ConfigLoader::finalize(RawMuxkitConfig::default());
        assert_eq!(config.plugins.system_dir, PathBuf::from("/etc/muxkit/plugins"));
        assert!(config.plugins.load_system);
        assert!(config.plugins.extra_dirs.is_empty());
    }

    #[test]
    #[serial]
    fn test_project_config_path_env_override() {
        unsafe {
            std::env::set_var("MUXKIT_PROJECT_CONFIG_DIR", "/tmp/muxkit-project");
        }
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from("/tmp/muxkit-project/config.toml")
        );
        unsafe {
            std::env::remove_var("MUXKIT_PROJECT_CONFIG_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_load_layers_project_over_user() {
        let user = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        std::fs::create_dir_all(user.path().join("muxkit")).unwrap();
        std::fs::write(
            user.path().join("muxkit/config.toml"),
            "[plugins]\nload_system = false\nextra_dirs = [\"/user/extra\"]\n",
        )
        .unwrap();
        std::fs::write(
            project.path().join("config.toml"),
            "[plugins]\nextra_dirs = [\"/project/extra\"]\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", user.path());
            std::env::set_var("MUXKIT_PROJECT_CONFIG_DIR", project.path());
        }
        let config = ConfigLoader::load().unwrap();
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
            std::env::remove_var("MUXKIT_PROJECT_CONFIG_DIR");
        }

        assert!(!config.plugins.load_system);
        assert_eq!(
            config.plugins.extra_dirs,
            vec![PathBuf::from("/project/extra")]
        );
    }
}
