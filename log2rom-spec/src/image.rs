//! # ROM Image Structure and Text Format
//!
//! A `RomImage` holds the raw codes of a generated or parsed table along
//! with the output format that interprets them.
//!
//! The on-disk form is plain text: one fixed-width binary line per
//! address, in ascending address order, newline after every line, no
//! header or comments. This is the layout `$readmemb` consumes.
//!
//! ```text
//! Line    Content
//! ──────────────────────────────────
//! 0       entry for address 0
//! 1       entry for address 1
//! ...     ...
//! 2^n-1   entry for the last address
//! ```

use crate::encoding;
use crate::error::RomError;
use crate::format::FixedFormat;
use crate::table::TableConfig;

/// In-memory ROM image: output format plus one raw code per address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomImage {
    /// Signed fixed-point format of the stored codes
    pub format: FixedFormat,

    /// Raw codes in address order
    pub entries: Vec<u64>,
}

impl RomImage {
    /// Create an image from raw codes
    pub fn new(format: FixedFormat, entries: Vec<u64>) -> Self {
        Self { format, entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the image holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw code stored at an address
    pub fn raw_at(&self, address: u64) -> Result<u64, RomError> {
        self.entries
            .get(address as usize)
            .copied()
            .ok_or(RomError::AddressOutOfBounds {
                address,
                len: self.entries.len(),
            })
    }

    /// Signed scaled value stored at an address
    pub fn signed_at(&self, address: u64) -> Result<i64, RomError> {
        encoding::decode(self.raw_at(address)?, self.format.total_bits)
    }

    /// Real value stored at an address
    pub fn real_at(&self, address: u64) -> Result<f64, RomError> {
        Ok(self.format.signed_to_real(self.signed_at(address)?))
    }

    /// Validate the image against a table configuration
    pub fn validate(&self, config: &TableConfig) -> Result<(), RomError> {
        config.validate()?;

        // One line per input code, nothing more
        let expected = config.address_count();
        if self.entries.len() as u64 != expected {
            return Err(RomError::EntryCountMismatch {
                expected,
                found: self.entries.len() as u64,
            });
        }

        Ok(())
    }

    /// Serialize to the text format
    pub fn to_text(&self) -> String {
        let width = self.format.total_bits as usize;
        let mut text = String::with_capacity(self.entries.len() * (width + 1));

        for &raw in &self.entries {
            text.push_str(&encoding::to_bit_string(raw, self.format.total_bits));
            text.push('\n');
        }

        text
    }

    /// Parse the text format
    ///
    /// Every line must be exactly `format.total_bits` characters of `'0'`
    /// and `'1'`. Line numbers are ROM addresses; the first bad line
    /// aborts the parse. Entry count is not checked here, use
    /// [`validate`](Self::validate) once the target configuration is
    /// known.
    pub fn from_text(text: &str, format: FixedFormat) -> Result<Self, RomError> {
        format.validate()?;

        let mut entries = Vec::new();
        for (address, line) in text.lines().enumerate() {
            let raw = encoding::parse_bit_string(line, format.total_bits, address as u64)?;
            entries.push(raw);
        }

        Ok(Self { format, entries })
    }
}
