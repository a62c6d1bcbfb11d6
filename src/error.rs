//! Fatal errors
//!
//! Syntax problems are never errors in this crate: they are collected as
//! diagnostics. The variants here stop a run before any report is produced.

use config::ConfigError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that prevent a check from running
#[derive(Debug)]
pub enum CheckError {
    /// The input file does not exist
    FileNotFound { path: PathBuf },
    /// The input file exists but could not be read
    Io { path: PathBuf, source: io::Error },
    /// The embedded configuration could not be built
    Config(ConfigError),
}

impl CheckError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CheckError::FileNotFound { path }
        } else {
            CheckError::Io { path, source }
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            CheckError::Io { path, source } => {
                write!(f, "Could not read {}: {}", path.display(), source)
            }
            CheckError::Config(err) => write!(f, "Invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::FileNotFound { .. } => None,
            CheckError::Io { source, .. } => Some(source),
            CheckError::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(err: ConfigError) -> Self {
        CheckError::Config(err)
    }
}
