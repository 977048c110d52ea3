//! # Log2 ROM Specification
//!
//! Fixed-point base-2 logarithm lookup tables for the rasterizer
//! attribute-interpolation datapath.
//!
//! ## Key Features
//! - Unsigned fixed-point input format interpreting ROM addresses
//! - Signed two's-complement output format for stored entries
//! - Text image format loadable with `$readmemb` (one binary line per address)
//! - Binary sidecar binding an image to the formats that produced it
//! - One shared reference law, so producer and checker cannot drift apart

pub mod format;
pub mod encoding;
pub mod table;
pub mod image;
pub mod sidecar;
pub mod error;

pub use format::{FixedFormat, FormatError};
pub use table::TableConfig;
pub use image::RomImage;
pub use sidecar::{image_digest, sidecar_path, RomSidecar, MAGIC, VERSION};
pub use error::RomError;

/// ROM address type (unsigned input code)
pub type Address = u64;

/// Default image filename consumed by the RTL
pub const DEFAULT_IMAGE_NAME: &str = "log2_rom.mem";
