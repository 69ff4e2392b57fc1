use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaxstackError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] env::VarError),
    #[error("External command failed: {0}")]
    CommandFailed(String),
}
