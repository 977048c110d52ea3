//! Main validation logic

use std::fs;
use std::io;
use std::path::Path;

use log2rom_spec::{sidecar_path, RomImage, RomSidecar, TableConfig};
use tracing::{debug, warn};

use crate::error::{Result, ValidatorError};
use crate::report::{ErrorStats, Mismatch, ValidationReport};

/// Default comparison tolerance in the real domain
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Compare every image entry against the recomputed reference
///
/// The comparison runs in the real domain: each entry is decoded to its
/// signed value and divided by the output scale, the reference log2 is
/// recomputed from the address, and an absolute difference at or above
/// the tolerance counts as a mismatch. Mismatches accumulate; the scan
/// never stops early. A raw code wider than the output format is an
/// artifact error and aborts immediately.
pub fn validate_image(
    image: &RomImage,
    config: &TableConfig,
    tolerance: f64,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(tolerance);
    let mut abs_errors = Vec::with_capacity(image.len());

    for address in 0..image.len() as u64 {
        let rom_value = image.real_at(address)?;
        let reference = config.reference_log2(address);
        let error = (rom_value - reference).abs();
        abs_errors.push(error);

        if error >= tolerance {
            report.add_mismatch(Mismatch {
                address,
                rom_value,
                reference,
            });
        }
    }

    report.entries_checked = image.len() as u64;
    report.stats = ErrorStats::from_abs_errors(&abs_errors);

    debug!(
        "checked {} entries, {} mismatches",
        report.entries_checked,
        report.mismatch_count()
    );
    Ok(report)
}

/// Validate a ROM image file against a table configuration
///
/// The sidecar next to the image is checked first when present, so
/// format drift surfaces as a configuration mismatch before a single
/// entry is parsed. Without a sidecar the image is taken at face value
/// and drift shows up as line-width errors or mismatched entries.
pub fn validate_file(path: &Path, config: &TableConfig, tolerance: f64) -> Result<ValidationReport> {
    config.validate()?;

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ValidatorError::MissingImage {
            path: path.to_path_buf(),
        },
        _ => ValidatorError::IoError(e),
    })?;

    check_sidecar(path, config, text.as_bytes())?;

    let image = RomImage::from_text(&text, config.output)?;
    image.validate(config)?;

    validate_image(&image, config, tolerance)
}

/// Verify the sidecar next to an image, if one exists
fn check_sidecar(path: &Path, config: &TableConfig, image_text: &[u8]) -> Result<()> {
    let meta = sidecar_path(path);

    match fs::read(&meta) {
        Ok(bytes) => {
            let sidecar = RomSidecar::from_bytes(&bytes)?;
            sidecar.verify_binding(config, image_text)?;
            debug!("sidecar verified: {}", meta.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("no sidecar at {}, format binding unchecked", meta.display());
            Ok(())
        }
        Err(e) => Err(ValidatorError::IoError(e)),
    }
}
