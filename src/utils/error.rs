use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read context file '{path}': {source}", path = path.display())]
    ContextLoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GuideError {
    /// Short hint printed next to the error by the CLI.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GuideError::ContextLoadError { .. } | GuideError::IoError(_) => {
                "Check that the file exists and is readable UTF-8 text"
            }
            GuideError::ConfigError { .. }
            | GuideError::ConfigValidationError { .. }
            | GuideError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
