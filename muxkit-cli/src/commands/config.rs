//! Configuration inspection commands

use std::path::PathBuf;

use crate::config::ConfigLoader;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration as TOML
    Show,
    /// Show the config file layers, in merge order
    Path,
    /// Show the plugin directories scanned at startup, in load order
    Dirs,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = ConfigLoader::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            let layers = [
                ("user", ConfigLoader::user_config_path()),
                ("project", ConfigLoader::project_config_path()),
            ];
            print!("{}", render_layers(&layers));
        }
        ConfigCommands::Dirs => {
            let config = ConfigLoader::load()?;
            print!("{}", render_dirs(&config.plugins.host_config().plugin_dirs()));
        }
    }
    Ok(())
}

fn marker(present: bool) -> &'static str {
    if present { "✓" } else { "✗" }
}

/// One line per config layer; later layers override earlier ones
fn render_layers(layers: &[(&str, PathBuf)]) -> String {
    layers
        .iter()
        .map(|(label, path)| {
            format!("{} {:<8} {}\n", marker(path.is_file()), label, path.display())
        })
        .collect()
}

fn render_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|dir| format!("{} {}\n", marker(dir.is_dir()), dir.display()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: ConfigCommands,
    }

    #[test]
    fn test_config_args_parsing() {
        assert!(matches!(
            TestCli::parse_from(["test", "show"]).cmd,
            ConfigCommands::Show
        ));
        assert!(matches!(
            TestCli::parse_from(["test", "path"]).cmd,
            ConfigCommands::Path
        ));
        assert!(matches!(
            TestCli::parse_from(["test", "dirs"]).cmd,
            ConfigCommands::Dirs
        ));
    }

    #[test]
    fn test_render_layers_marks_existing_files() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("config.toml");
        std::fs::write(&user, "[plugins]\n").unwrap();
        let project = dir.path().join("project/config.toml");

        let out = render_layers(&[("user", user.clone()), ("project", project.clone())]);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("✓ user     {}", user.display()));
        assert_eq!(lines[1], format!("✗ project  {}", project.display()));
    }

    #[test]
    fn test_render_dirs_keeps_load_order() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let out = render_dirs(&[missing.clone(), dir.path().to_path_buf()]);

        assert_eq!(
            out,
            format!("✗ {}\n✓ {}\n", missing.display(), dir.path().display())
        );
    }
}
