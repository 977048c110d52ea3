//! # Error Types for the Log2 ROM Toolkit

use crate::format::FormatError;
use crate::table::TableConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomError {
    // Format errors
    #[error("Invalid fixed-point format: {0}")]
    InvalidFormat(#[from] FormatError),

    // Encoding errors
    #[error("Value {value} out of range [{min}, {max}]")]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("Quantized value {value} does not fit the signed range [{min}, {max}]")]
    QuantizeOverflow { value: f64, min: i64, max: i64 },

    #[error("Raw code {raw:#x} exceeds {total_bits} bits")]
    WidthOverflow { raw: u64, total_bits: u8 },

    // Image errors
    #[error("Invalid line width at address {address}: expected {expected} characters, found {found}")]
    InvalidLineWidth {
        address: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid character '{character}' at address {address}: ROM lines must be binary")]
    InvalidBitChar { address: u64, character: char },

    #[error("Invalid entry count: expected {expected} lines, found {found}")]
    EntryCountMismatch { expected: u64, found: u64 },

    #[error("Address {address} out of bounds for {len}-entry image")]
    AddressOutOfBounds { address: u64, len: usize },

    // Sidecar errors
    #[error("Invalid sidecar magic: expected 0x4C555432, got {0:#010x}")]
    InvalidMagic(u32),

    #[error("Invalid sidecar version: expected {expected:#010x}, found {found:#010x}")]
    InvalidVersion { expected: u32, found: u32 },

    #[error("Invalid sidecar size: expected {expected} bytes, found {found} bytes")]
    InvalidSidecarSize { expected: usize, found: usize },

    #[error("Sidecar records table configuration ({sidecar}), requested ({requested})")]
    ConfigMismatch {
        sidecar: TableConfig,
        requested: TableConfig,
    },

    #[error("ROM image content does not match the digest recorded in its sidecar")]
    DigestMismatch,

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RomError {
    /// Check if this error indicates a corrupt or inconsistent on-disk artifact
    /// rather than an invalid configuration
    pub fn is_artifact(&self) -> bool {
        matches!(
            self,
            RomError::WidthOverflow { .. }
                | RomError::InvalidLineWidth { .. }
                | RomError::InvalidBitChar { .. }
                | RomError::EntryCountMismatch { .. }
                | RomError::InvalidMagic(_)
                | RomError::InvalidVersion { .. }
                | RomError::InvalidSidecarSize { .. }
                | RomError::ConfigMismatch { .. }
                | RomError::DigestMismatch
        )
    }
}
