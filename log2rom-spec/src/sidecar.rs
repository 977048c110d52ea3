//! # ROM Sidecar Metadata
//!
//! The text image deliberately carries no header, so the formats it was
//! generated under travel in a small binary sidecar written next to it
//! (`<image>.meta`). A validator can then detect format drift before
//! comparing a single entry, instead of misreading every line.

use crate::error::RomError;
use crate::format::FixedFormat;
use crate::table::TableConfig;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::{Path, PathBuf};

/// Magic number for sidecar files: "LUT2" = 0x4C555432
pub const MAGIC: u32 = 0x4C555432;

/// Version: v1.0 = 0x00010000
pub const VERSION: u32 = 0x00010000;

/// Sidecar record for a ROM image (52 bytes)
///
/// Binary format:
/// ```text
/// Offset  Size  Field
/// ──────────────────────────────────
/// 0x00    4     magic ("LUT2")
/// 0x04    4     version (v1.0)
/// 0x08    1     input_total_bits
/// 0x09    1     input_frac_bits
/// 0x0A    1     output_total_bits
/// 0x0B    1     output_frac_bits
/// 0x0C    8     entry_count
/// 0x14    32    SHA-256 of the image text
/// ```
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomSidecar {
    /// Magic number: "LUT2" = 0x4C555432
    pub magic: u32,

    /// Version: 0x00010000 for v1.0
    pub version: u32,

    /// Total bit width of ROM addresses
    pub input_total_bits: u8,

    /// Fractional bits of ROM addresses
    pub input_frac_bits: u8,

    /// Total bit width of ROM entries
    pub output_total_bits: u8,

    /// Fractional bits of ROM entries
    pub output_frac_bits: u8,

    /// Number of lines in the image
    pub entry_count: u64,

    /// SHA-256 digest of the exact image text
    pub digest: [u8; 32],
}

impl RomSidecar {
    /// Sidecar size in bytes
    pub const SIZE: usize = 52;

    /// Create a sidecar record with validation
    pub fn new(
        config: &TableConfig,
        entry_count: u64,
        digest: [u8; 32],
    ) -> Result<Self, RomError> {
        config.validate()?;
        Ok(Self {
            magic: MAGIC,
            version: VERSION,
            input_total_bits: config.input.total_bits,
            input_frac_bits: config.input.frac_bits,
            output_total_bits: config.output.total_bits,
            output_frac_bits: config.output.frac_bits,
            entry_count,
            digest,
        })
    }

    /// Create the sidecar record binding an image text to its configuration
    pub fn for_image(config: &TableConfig, image_text: &str) -> Result<Self, RomError> {
        Self::new(
            config,
            image_text.lines().count() as u64,
            image_digest(image_text.as_bytes()),
        )
    }

    /// Get the table configuration from this sidecar
    pub fn config(&self) -> TableConfig {
        TableConfig {
            input: FixedFormat {
                total_bits: self.input_total_bits,
                frac_bits: self.input_frac_bits,
            },
            output: FixedFormat {
                total_bits: self.output_total_bits,
                frac_bits: self.output_frac_bits,
            },
        }
    }

    /// Validate the sidecar record
    pub fn validate(&self) -> Result<(), RomError> {
        // Check magic
        if self.magic != MAGIC {
            return Err(RomError::InvalidMagic(self.magic));
        }

        // Check version
        if self.version != VERSION {
            return Err(RomError::InvalidVersion {
                expected: VERSION,
                found: self.version,
            });
        }

        // Validate recorded formats
        self.config().validate()?;

        Ok(())
    }

    /// Check that this sidecar binds the given image text to the requested
    /// configuration
    ///
    /// Fails on format drift, entry count drift, or a digest mismatch
    /// (the image was edited after generation).
    pub fn verify_binding(&self, config: &TableConfig, image_text: &[u8]) -> Result<(), RomError> {
        self.validate()?;

        let recorded = self.config();
        if recorded != *config {
            return Err(RomError::ConfigMismatch {
                sidecar: recorded,
                requested: *config,
            });
        }

        let expected = config.address_count();
        if self.entry_count != expected {
            return Err(RomError::EntryCountMismatch {
                expected,
                found: self.entry_count,
            });
        }

        if self.digest != image_digest(image_text) {
            return Err(RomError::DigestMismatch);
        }

        Ok(())
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..4].copy_from_slice(&self.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8] = self.input_total_bits;
        bytes[9] = self.input_frac_bits;
        bytes[10] = self.output_total_bits;
        bytes[11] = self.output_frac_bits;
        bytes[12..20].copy_from_slice(&self.entry_count.to_le_bytes());
        bytes[20..52].copy_from_slice(&self.digest);

        bytes
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RomError> {
        if bytes.len() != Self::SIZE {
            return Err(RomError::InvalidSidecarSize {
                expected: Self::SIZE,
                found: bytes.len(),
            });
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&bytes[20..52]);

        let sidecar = Self {
            magic: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            version: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            input_total_bits: bytes[8],
            input_frac_bits: bytes[9],
            output_total_bits: bytes[10],
            output_frac_bits: bytes[11],
            entry_count: u64::from_le_bytes([
                bytes[12], bytes[13], bytes[14], bytes[15], bytes[16], bytes[17], bytes[18],
                bytes[19],
            ]),
            digest,
        };

        sidecar.validate()?;
        Ok(sidecar)
    }
}

impl fmt::Display for RomSidecar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Log2 ROM Sidecar v1.0")?;
        writeln!(f, "  Magic:    {:#010x}", self.magic)?;
        writeln!(f, "  Version:  {:#010x}", self.version)?;
        writeln!(f, "  Config:   {}", self.config())?;
        writeln!(f, "  Entries:  {}", self.entry_count)?;
        write!(f, "  Digest:   ")?;
        for byte in &self.digest {
            write!(f, "{byte:02x}")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

/// SHA-256 digest of the exact image text bytes
pub fn image_digest(image_text: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(image_text);
    hasher.finalize().into()
}

/// Path of the sidecar next to an image: `<image>.meta`
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let mut path = image_path.as_os_str().to_os_string();
    path.push(".meta");
    PathBuf::from(path)
}
