//! Log2 ROM Generator
//!
//! Generate fixed-point base-2 logarithm lookup tables as `$readmemb`
//! text images, with a binary sidecar binding each image to the formats
//! that produced it.
//!
//! ## Example
//!
//! ```rust
//! use log2rom_generator::generate;
//! use log2rom_spec::TableConfig;
//!
//! let image = generate(&TableConfig::DEFAULT).unwrap();
//! assert_eq!(image.len(), 131072);
//! assert_eq!(image.raw_at(0).unwrap(), 0);
//! ```

pub mod error;
pub mod generator;

pub use error::{GeneratorError, Result};
pub use generator::{generate, generate_to_file, write_image};
