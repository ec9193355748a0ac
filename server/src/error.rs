//! Startup and serve errors for the binary.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
