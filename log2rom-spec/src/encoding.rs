//! # Two's-Complement Encoding Helpers
//!
//! This module provides the encode/decode pair mapping signed scaled
//! integers to the unsigned raw codes stored in a ROM image, plus the
//! fixed-width binary serialization used by the on-disk text format.
//!
//! ## Encoding Law (n-bit code)
//!
//! ```text
//! encode: v in [-2^(n-1), 2^(n-1)-1]  ->  v        (v >= 0)
//!                                         v + 2^n  (v <  0)
//! decode: raw in [0, 2^n)             ->  raw        (raw <  2^(n-1))
//!                                         raw - 2^n  (raw >= 2^(n-1))
//! ```
//!
//! All helpers take the code width as a `total_bits` argument, which must
//! come from a validated [`FixedFormat`](crate::FixedFormat) (1-32 bits).

use crate::error::RomError;

// ============================================================================
// Width Helpers
// ============================================================================

/// All-ones mask covering an n-bit code
#[inline]
pub const fn raw_mask(total_bits: u8) -> u64 {
    (1u64 << total_bits) - 1
}

/// Sign bit of an n-bit two's-complement code
#[inline]
pub const fn sign_bit(total_bits: u8) -> u64 {
    1u64 << (total_bits - 1)
}

// ============================================================================
// Encode / Decode
// ============================================================================

/// Encode a signed scaled integer as an n-bit two's-complement raw code
pub fn encode(value: i64, total_bits: u8) -> Result<u64, RomError> {
    let min = -(1i64 << (total_bits - 1));
    let max = (1i64 << (total_bits - 1)) - 1;

    if value < min || value > max {
        return Err(RomError::ValueOutOfRange { value, min, max });
    }

    if value < 0 {
        // Wrap negatives into the upper half of the code space
        Ok((value + (1i64 << total_bits)) as u64)
    } else {
        Ok(value as u64)
    }
}

/// Decode an n-bit two's-complement raw code back to a signed scaled integer
pub fn decode(raw: u64, total_bits: u8) -> Result<i64, RomError> {
    if raw > raw_mask(total_bits) {
        return Err(RomError::WidthOverflow { raw, total_bits });
    }

    if raw & sign_bit(total_bits) != 0 {
        // Sign extend: raw - 2^n
        Ok(raw as i64 - (1i64 << total_bits))
    } else {
        Ok(raw as i64)
    }
}

// ============================================================================
// Bit-String Serialization
// ============================================================================

/// Render a raw code as a fixed-width binary string
///
/// The code must fit `total_bits`; wider codes render wider strings.
pub fn to_bit_string(raw: u64, total_bits: u8) -> String {
    format!("{:0width$b}", raw, width = total_bits as usize)
}

/// Parse one fixed-width binary ROM line into a raw code
///
/// The line must contain exactly `total_bits` characters, each `'0'` or
/// `'1'`. The address is carried into errors for diagnostics.
pub fn parse_bit_string(line: &str, total_bits: u8, address: u64) -> Result<u64, RomError> {
    let expected = total_bits as usize;
    if line.len() != expected {
        return Err(RomError::InvalidLineWidth {
            address,
            expected,
            found: line.len(),
        });
    }

    let mut raw = 0u64;
    for character in line.chars() {
        raw = (raw << 1)
            | match character {
                '0' => 0,
                '1' => 1,
                _ => return Err(RomError::InvalidBitChar { address, character }),
            };
    }

    Ok(raw)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_width() -> impl Strategy<Value = u8> {
        1u8..=32
    }

    proptest! {
        #[test]
        fn test_encode_decode_round_trip(width in arb_width(), seed in any::<i64>()) {
            let min = -(1i64 << (width - 1));
            let max = (1i64 << (width - 1)) - 1;
            let span = (max - min + 1) as u64;
            let value = min + (seed.unsigned_abs() % span) as i64;

            let raw = encode(value, width).unwrap();
            prop_assert!(raw <= raw_mask(width));
            prop_assert_eq!(decode(raw, width).unwrap(), value);
        }

        #[test]
        fn test_decode_encode_round_trip(width in arb_width(), seed in any::<u64>()) {
            let raw = seed & raw_mask(width);
            let value = decode(raw, width).unwrap();
            prop_assert_eq!(encode(value, width).unwrap(), raw);
        }

        #[test]
        fn test_bit_string_round_trip(width in arb_width(), seed in any::<u64>()) {
            let raw = seed & raw_mask(width);
            let line = to_bit_string(raw, width);
            prop_assert_eq!(line.len(), width as usize);
            prop_assert_eq!(parse_bit_string(&line, width, 0).unwrap(), raw);
        }
    }
}
