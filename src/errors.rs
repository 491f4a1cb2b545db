use thiserror::Error;

use crate::config::ConfigError;
use crate::io::IoError;
use crate::text::WrapError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Wrap error: {0}")]
    Wrap(#[from] WrapError),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
