//! Plugin host error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a single plugin library
#[derive(Error, Debug)]
pub enum PluginHostError {
    /// The file could not be opened as a dynamic library
    #[error("{source}")]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The library does not export the `plugin` symbol
    #[error("{source}")]
    MissingSymbol {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// API version mismatch between muxkit and the plugin
    #[error("{}: API version mismatch: muxkit expects {expected}, plugin has {found}", .path.display())]
    ApiVersionMismatch {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    /// Interactive registration was given a relative path
    #[error("failed to load plugin \"{}\": path must be absolute.", .path.display())]
    RelativePath { path: PathBuf },
}

impl PluginHostError {
    /// Path of the library the error concerns
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::MissingSymbol { path, .. }
            | Self::ApiVersionMismatch { path, .. }
            | Self::RelativePath { path } => path,
        }
    }
}

/// Errors from executing a plugin-provided command
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// No registered command has this name or alias
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Fewer positional arguments than the command accepts
    #[error("command {name}: too few arguments (usage: {name} {usage})")]
    TooFewArguments { name: String, usage: String },

    /// More positional arguments than the command accepts
    #[error("command {name}: too many arguments (usage: {name} {usage})")]
    TooManyArguments { name: String, usage: String },
}
