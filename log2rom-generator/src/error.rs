//! Generator errors

use log2rom_spec::{FormatError, RomError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] FormatError),

    #[error("{0}")]
    Rom(#[from] RomError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
