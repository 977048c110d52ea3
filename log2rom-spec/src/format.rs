//! # Fixed-Point Number Formats
//!
//! This module defines the fixed-point formats used by the log2 lookup table.
//! A format is a pair of widths: the total bit width of a code and the number
//! of those bits that sit below the binary point. The real value represented
//! by a raw code is always `raw / 2^frac_bits`.
//!
//! ROM addresses are interpreted as unsigned codes in the input format; ROM
//! entries are signed two's-complement codes in the output format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RomError;

/// A fixed-point format: total width and fractional width in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedFormat {
    /// Total bit width of a code (1-32)
    pub total_bits: u8,
    /// Bits below the binary point (0-total_bits)
    pub frac_bits: u8,
}

impl FixedFormat {
    /// Create a new format with validation
    pub const fn new(total_bits: u8, frac_bits: u8) -> Result<Self, FormatError> {
        let format = Self {
            total_bits,
            frac_bits,
        };

        if total_bits < 1 || total_bits > 32 {
            return Err(FormatError::InvalidTotalBits);
        }
        if frac_bits > total_bits {
            return Err(FormatError::FracBitsExceedTotal);
        }

        Ok(format)
    }

    /// Integer bits above the binary point
    #[inline]
    pub const fn integer_bits(&self) -> u8 {
        self.total_bits - self.frac_bits
    }

    /// Scale factor `2^frac_bits` relating raw codes to real values
    #[inline]
    pub const fn scale(&self) -> u64 {
        1u64 << self.frac_bits
    }

    /// Largest unsigned raw code representable in this format
    #[inline]
    pub const fn max_raw(&self) -> u64 {
        (1u64 << self.total_bits) - 1
    }

    /// Smallest signed value representable in two's complement
    #[inline]
    pub const fn min_signed(&self) -> i64 {
        -(1i64 << (self.total_bits - 1))
    }

    /// Largest signed value representable in two's complement
    #[inline]
    pub const fn max_signed(&self) -> i64 {
        (1i64 << (self.total_bits - 1)) - 1
    }

    /// Real value of an unsigned raw code in this format
    #[inline]
    pub fn raw_to_real(&self, raw: u64) -> f64 {
        raw as f64 / self.scale() as f64
    }

    /// Real value of a signed scaled integer in this format
    #[inline]
    pub fn signed_to_real(&self, value: i64) -> f64 {
        value as f64 / self.scale() as f64
    }

    /// Quantize a real value to the nearest signed scaled integer
    ///
    /// Rounds half away from zero. Fails if the scaled value does not fit
    /// the signed two's-complement range of this format.
    pub fn quantize(&self, value: f64) -> Result<i64, RomError> {
        let scaled = (value * self.scale() as f64).round();
        let min = self.min_signed();
        let max = self.max_signed();

        if !scaled.is_finite() || scaled < min as f64 || scaled > max as f64 {
            return Err(RomError::QuantizeOverflow {
                value: scaled,
                min,
                max,
            });
        }

        Ok(scaled as i64)
    }

    /// Validate format widths
    pub fn validate(&self) -> Result<(), FormatError> {
        // Total width must fit a u32 code and be non-empty
        if self.total_bits < 1 || self.total_bits > 32 {
            return Err(FormatError::InvalidTotalBits);
        }

        // Fractional bits cannot exceed the total width
        if self.frac_bits > self.total_bits {
            return Err(FormatError::FracBitsExceedTotal);
        }

        Ok(())
    }
}

impl fmt::Display for FixedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.total_bits, self.frac_bits)
    }
}

/// Format error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Total bits must be in range [1, 32]
    InvalidTotalBits,
    /// Fractional bits must not exceed total bits
    FracBitsExceedTotal,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidTotalBits => {
                write!(f, "total_bits must be in range [1, 32]")
            }
            FormatError::FracBitsExceedTotal => {
                write!(f, "frac_bits must not exceed total_bits")
            }
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_properties() {
        let f = FixedFormat::new(17, 10).unwrap();
        assert_eq!(f.integer_bits(), 7);
        assert_eq!(f.scale(), 1024);
        assert_eq!(f.max_raw(), 131071);
        assert_eq!(f.min_signed(), -65536);
        assert_eq!(f.max_signed(), 65535);

        let f = FixedFormat::new(28, 23).unwrap();
        assert_eq!(f.integer_bits(), 5);
        assert_eq!(f.scale(), 1 << 23);
        assert_eq!(f.max_raw(), (1 << 28) - 1);
        assert_eq!(f.min_signed(), -(1 << 27));
        assert_eq!(f.max_signed(), (1 << 27) - 1);
    }

    #[test]
    fn test_extreme_widths() {
        // Full 32-bit format
        let f = FixedFormat::new(32, 32).unwrap();
        assert_eq!(f.scale(), 1u64 << 32);
        assert_eq!(f.max_raw(), u32::MAX as u64);
        assert_eq!(f.min_signed(), -(1i64 << 31));

        // Single-bit format
        let f = FixedFormat::new(1, 0).unwrap();
        assert_eq!(f.max_raw(), 1);
        assert_eq!(f.min_signed(), -1);
        assert_eq!(f.max_signed(), 0);
    }

    #[test]
    fn test_validation() {
        // Valid formats
        assert!(FixedFormat::new(17, 10).is_ok());
        assert!(FixedFormat::new(1, 0).is_ok());
        assert!(FixedFormat::new(32, 32).is_ok());
        assert!(FixedFormat::new(8, 8).is_ok());

        // Invalid total bits
        assert_eq!(
            FixedFormat::new(0, 0).unwrap_err(),
            FormatError::InvalidTotalBits
        );
        assert_eq!(
            FixedFormat::new(33, 0).unwrap_err(),
            FormatError::InvalidTotalBits
        );

        // Fractional bits exceed total
        assert_eq!(
            FixedFormat::new(8, 9).unwrap_err(),
            FormatError::FracBitsExceedTotal
        );

        // Literal construction caught by validate()
        let f = FixedFormat {
            total_bits: 40,
            frac_bits: 0,
        };
        assert_eq!(f.validate().unwrap_err(), FormatError::InvalidTotalBits);
    }

    #[test]
    fn test_real_conversions() {
        let f = FixedFormat::new(17, 10).unwrap();
        assert_eq!(f.raw_to_real(0), 0.0);
        assert_eq!(f.raw_to_real(1024), 1.0);
        assert_eq!(f.raw_to_real(1536), 1.5);
        assert_eq!(f.signed_to_real(-1024), -1.0);

        let f = FixedFormat::new(8, 0).unwrap();
        assert_eq!(f.raw_to_real(200), 200.0);
    }

    #[test]
    fn test_quantize_rounding() {
        let f = FixedFormat::new(8, 4).unwrap();

        // Exact values pass through
        assert_eq!(f.quantize(0.0).unwrap(), 0);
        assert_eq!(f.quantize(1.0).unwrap(), 16);
        assert_eq!(f.quantize(-2.0).unwrap(), -32);

        // Nearest rounding, ties away from zero
        assert_eq!(f.quantize(0.03125).unwrap(), 1); // 0.5 rounds up
        assert_eq!(f.quantize(-0.03125).unwrap(), -1); // -0.5 rounds down
        assert_eq!(f.quantize(0.09).unwrap(), 1); // 1.44 rounds to 1
        assert_eq!(f.quantize(0.10).unwrap(), 2); // 1.6 rounds to 2
    }

    #[test]
    fn test_quantize_overflow() {
        let f = FixedFormat::new(8, 4).unwrap();

        // Range is [-128, 127] scaled, i.e. [-8.0, 7.9375] real
        assert_eq!(f.quantize(7.9375).unwrap(), 127);
        assert_eq!(f.quantize(-8.0).unwrap(), -128);
        assert!(f.quantize(8.0).is_err());
        assert!(f.quantize(-8.1).is_err());
        assert!(f.quantize(f64::NAN).is_err());
        assert!(f.quantize(f64::INFINITY).is_err());

        match f.quantize(100.0).unwrap_err() {
            RomError::QuantizeOverflow { value, min, max } => {
                assert_eq!(value, 1600.0);
                assert_eq!(min, -128);
                assert_eq!(max, 127);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let f = FixedFormat::new(17, 10).unwrap();
        assert_eq!(f.to_string(), "17/10");

        assert_eq!(
            FormatError::InvalidTotalBits.to_string(),
            "total_bits must be in range [1, 32]"
        );
    }
}
