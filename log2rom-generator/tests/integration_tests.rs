//! Integration tests for the Log2 ROM generator
//!
//! Tests the complete generation workflow including:
//! - Image and sidecar file output
//! - Text layout of written images
//! - Determinism across runs
//! - Fail-fast behavior on unrepresentable configurations

use std::fs;

use log2rom_generator::{generate, generate_to_file, write_image};
use log2rom_spec::{sidecar_path, FixedFormat, RomImage, RomSidecar, TableConfig};
use tempfile::TempDir;

fn config(it: u8, ifr: u8, ot: u8, ofr: u8) -> TableConfig {
    TableConfig::new(
        FixedFormat::new(it, ifr).unwrap(),
        FixedFormat::new(ot, ofr).unwrap(),
    )
    .unwrap()
}

// ============================================================================
// File Output Tests
// ============================================================================

#[test]
fn test_writes_image_and_sidecar() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("log2_rom.mem");

    let config = config(8, 4, 16, 8);
    let image = generate_to_file(&config, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, image.to_text());
    assert_eq!(text.lines().count(), 256);
    assert!(text.ends_with('\n'));
    for line in text.lines() {
        assert_eq!(line.len(), 16);
        assert!(line.chars().all(|c| c == '0' || c == '1'));
    }

    let sidecar_bytes = fs::read(sidecar_path(&path)).unwrap();
    let sidecar = RomSidecar::from_bytes(&sidecar_bytes).unwrap();
    assert_eq!(sidecar.config(), config);
    assert_eq!(sidecar.entry_count, 256);
    assert!(sidecar.verify_binding(&config, text.as_bytes()).is_ok());
}

#[test]
fn test_image_has_no_header_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("rom.mem");

    generate_to_file(&config(4, 0, 8, 4), &path).unwrap();

    // The very first line is the address-zero entry, not a header
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "00000000");

    // log2(1) = 0 and log2(4) = 2.0, stored as 32/16 in 8/4
    assert_eq!(lines[1], "00000000");
    assert_eq!(lines[4], "00100000");
}

#[test]
fn test_written_image_parses_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("rom.mem");

    let config = config(8, 4, 16, 8);
    let image = generate_to_file(&config, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed = RomImage::from_text(&text, config.output).unwrap();
    assert_eq!(parsed, image);
    assert!(parsed.validate(&config).is_ok());
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.mem");
    let second = temp_dir.path().join("second.mem");

    let config = config(8, 4, 16, 8);
    generate_to_file(&config, &first).unwrap();
    generate_to_file(&config, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(
        fs::read(sidecar_path(&first)).unwrap(),
        fs::read(sidecar_path(&second)).unwrap()
    );
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_overflow_config_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("bad.mem");

    // 17-bit integer addresses cannot fit a 6/2 output range
    let result = generate_to_file(&config(17, 0, 6, 2), &path);
    assert!(result.is_err());
    assert!(!path.exists());
    assert!(!sidecar_path(&path).exists());
}

#[test]
fn test_write_image_rejects_wrong_entry_count() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("short.mem");

    let config = config(4, 0, 8, 4);
    let image = RomImage::new(config.output, vec![0; 15]);

    assert!(write_image(&image, &config, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_generate_rejects_invalid_format() {
    let bad = TableConfig {
        input: FixedFormat {
            total_bits: 0,
            frac_bits: 0,
        },
        output: FixedFormat {
            total_bits: 8,
            frac_bits: 4,
        },
    };
    assert!(generate(&bad).is_err());
}
