//! Main generation logic

use std::fs;
use std::path::Path;

use log2rom_spec::{encoding, sidecar_path, RomImage, RomSidecar, TableConfig};
use tracing::{debug, info};

use crate::error::Result;

/// Generate the complete ROM image for a table configuration
///
/// Walks every input code in ascending order, quantizes its reference
/// log2 value, and encodes the result. An entry that cannot be
/// represented in the output format aborts generation, so a partial
/// table is never produced.
pub fn generate(config: &TableConfig) -> Result<RomImage> {
    config.validate()?;

    let count = config.address_count();
    debug!("generating {} entries ({})", count, config);

    let mut entries = Vec::with_capacity(count as usize);
    for address in 0..count {
        let value = config.entry_value(address)?;
        let raw = encoding::encode(value, config.output.total_bits)?;
        entries.push(raw);
    }

    Ok(RomImage::new(config.output, entries))
}

/// Write an image and its sidecar next to each other
pub fn write_image(image: &RomImage, config: &TableConfig, path: &Path) -> Result<()> {
    image.validate(config)?;

    let text = image.to_text();
    let sidecar = RomSidecar::for_image(config, &text)?;

    fs::write(path, &text)?;
    fs::write(sidecar_path(path), sidecar.to_bytes())?;

    info!("wrote {} entries to {}", image.len(), path.display());
    Ok(())
}

/// Generate a ROM image and write it to disk with its sidecar
pub fn generate_to_file(config: &TableConfig, path: &Path) -> Result<RomImage> {
    let image = generate(config)?;
    write_image(&image, config, path)?;
    Ok(image)
}
