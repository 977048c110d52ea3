//! Validator errors

use std::path::PathBuf;

use log2rom_spec::{FormatError, RomError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("File '{}' not found. Please ensure the file exists.", .path.display())]
    MissingImage { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] FormatError),

    #[error("{0}")]
    Rom(#[from] RomError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ValidatorError {
    /// Process exit code for this error
    ///
    /// A missing image exits 2; corrupt artifacts and bad configurations
    /// exit 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ValidatorError::MissingImage { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
