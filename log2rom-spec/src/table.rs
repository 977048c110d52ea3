//! # Lookup-Table Configuration
//!
//! This module pairs the two fixed-point formats that define a log2 ROM:
//! the unsigned input format interpreting ROM addresses and the signed
//! output format interpreting ROM entries. It also carries the reference
//! law itself: what real value each address represents and what scaled
//! integer the table must store for it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RomError;
use crate::format::{FixedFormat, FormatError};

/// Table configuration: input (address) and output (entry) formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableConfig {
    /// Unsigned fixed-point format of ROM addresses
    pub input: FixedFormat,
    /// Signed fixed-point format of ROM entries
    pub output: FixedFormat,
}

impl TableConfig {
    /// Default configuration: 17/10 unsigned addresses, 28/23 signed entries
    ///
    /// 2^17 = 131072 entries. The output keeps 23 fractional bits so the
    /// worst-case quantization error (2^-24, about 6.0e-8) stays below the
    /// default validation tolerance of 1e-7.
    pub const DEFAULT: Self = Self {
        input: FixedFormat {
            total_bits: 17,
            frac_bits: 10,
        },
        output: FixedFormat {
            total_bits: 28,
            frac_bits: 23,
        },
    };

    /// Create a new configuration with validation
    pub fn new(input: FixedFormat, output: FixedFormat) -> Result<Self, FormatError> {
        input.validate()?;
        output.validate()?;
        Ok(Self { input, output })
    }

    /// Number of ROM entries (one line per input code)
    #[inline]
    pub const fn address_count(&self) -> u64 {
        1u64 << self.input.total_bits
    }

    /// Reference log2 value for an address
    ///
    /// The address is read as an unsigned code in the input format, so the
    /// represented value is `address / 2^input.frac_bits`. Address zero has
    /// no logarithm; the table stores zero there so the hardware always
    /// reads a well-defined code.
    pub fn reference_log2(&self, address: u64) -> f64 {
        if address == 0 {
            0.0
        } else {
            self.input.raw_to_real(address).log2()
        }
    }

    /// Signed scaled entry for an address, quantized to the output format
    pub fn entry_value(&self, address: u64) -> Result<i64, RomError> {
        if address == 0 {
            return Ok(0);
        }
        self.output.quantize(self.reference_log2(address))
    }

    /// Validate both formats
    pub fn validate(&self) -> Result<(), FormatError> {
        self.input.validate()?;
        self.output.validate()
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input {}, output {}", self.input, self.output)
    }
}
