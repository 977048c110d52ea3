//! Validation report accumulation
//!
//! Mismatches collect into a report instead of aborting the scan, so one
//! pass over the image surfaces every bad entry. Aggregate statistics
//! over the absolute errors ride along for logging.

use std::fmt;

use log2rom_spec::Address;

/// A single mismatched entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// ROM address of the entry
    pub address: Address,
    /// Real value decoded from the ROM
    pub rom_value: f64,
    /// Recomputed reference value
    pub reference: f64,
}

impl Mismatch {
    /// Absolute error between stored and reference values
    pub fn absolute_error(&self) -> f64 {
        (self.rom_value - self.reference).abs()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mismatch at address {}:", self.address)?;
        writeln!(f, "  ROM Value (Real):        {:.6}", self.rom_value)?;
        writeln!(f, "  Recomputed Value (Real): {:.6}", self.reference)?;
        Ok(())
    }
}

/// Aggregate statistics over the absolute errors of all checked entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    /// Largest absolute error observed
    pub max_abs_error: f64,
    /// Mean absolute error
    pub mean_abs_error: f64,
    /// Population standard deviation of absolute errors
    pub std_dev: f64,
}

impl ErrorStats {
    /// Compute statistics from the per-entry absolute errors
    pub fn from_abs_errors(errors: &[f64]) -> Self {
        if errors.is_empty() {
            return Self {
                max_abs_error: 0.0,
                mean_abs_error: 0.0,
                std_dev: 0.0,
            };
        }

        let max_abs_error = errors.iter().copied().fold(0.0_f64, f64::max);
        let mean_abs_error = statistical::mean(errors);
        let std_dev = statistical::population_standard_deviation(errors, Some(mean_abs_error));

        Self {
            max_abs_error,
            mean_abs_error,
            std_dev,
        }
    }
}

impl fmt::Display for ErrorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max |error| {:.3e}, mean {:.3e}, std dev {:.3e}",
            self.max_abs_error, self.mean_abs_error, self.std_dev
        )
    }
}

/// Validation report: every mismatch plus aggregate statistics
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Mismatched entries in ascending address order
    pub mismatches: Vec<Mismatch>,
    /// Number of entries checked
    pub entries_checked: u64,
    /// Tolerance the comparison ran at
    pub tolerance: f64,
    /// Statistics over all entries, matching or not
    pub stats: ErrorStats,
}

impl ValidationReport {
    /// Create an empty report for a given tolerance
    pub fn new(tolerance: f64) -> Self {
        Self {
            mismatches: Vec::new(),
            entries_checked: 0,
            tolerance,
            stats: ErrorStats {
                max_abs_error: 0.0,
                mean_abs_error: 0.0,
                std_dev: 0.0,
            },
        }
    }

    /// Check if validation passed (no mismatches)
    pub fn is_valid(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Number of mismatched entries
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }

    /// One-line verdict in the form the RTL build scripts grep for
    pub fn verdict(&self) -> String {
        if self.is_valid() {
            "Validation successful: All ROM entries are correct.".to_string()
        } else {
            format!(
                "Validation failed: {} mismatched entries found.",
                self.mismatch_count()
            )
        }
    }

    pub(crate) fn add_mismatch(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }
}
