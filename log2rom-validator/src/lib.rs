//! Log2 ROM Validator
//!
//! Recompute the reference logarithm for every address of a ROM image
//! and report each entry whose error meets or exceeds the tolerance,
//! together with aggregate error statistics.
//!
//! ## Example
//!
//! ```rust
//! use log2rom_spec::{FixedFormat, RomImage, TableConfig};
//! use log2rom_validator::validate_image;
//!
//! // A tiny 2/0 -> 4/2 table: one entry per address 0..4
//! let config = TableConfig::new(
//!     FixedFormat::new(2, 0).unwrap(),
//!     FixedFormat::new(4, 2).unwrap(),
//! )
//! .unwrap();
//! let image = RomImage::new(config.output, vec![0, 0, 4, 6]);
//!
//! // Coarse formats need coarse tolerances: 4/2 quantizes log2(3)
//! // with an error near 0.085
//! let report = validate_image(&image, &config, 0.125).unwrap();
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod report;
pub mod validator;

pub use error::{Result, ValidatorError};
pub use report::{ErrorStats, Mismatch, ValidationReport};
pub use validator::{validate_file, validate_image, DEFAULT_TOLERANCE};
