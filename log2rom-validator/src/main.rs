//! Log2 ROM Validator
//!
//! Checks a generated ROM image against the reference law: every entry is
//! decoded back to its real value and compared with a freshly computed
//! log2 at a configurable tolerance. Every mismatched address is printed,
//! followed by a one-line verdict.
//!
//! # Usage
//!
//! ```bash
//! # Validate log2_rom.mem against the default 17/10 -> 28/23 formats
//! log2val
//!
//! # Validate a custom table at a relaxed tolerance
//! log2val --image custom_rom.mem --output-total-bits 24 \
//!         --output-frac-bits 20 --tolerance 1e-6
//! ```
//!
//! Exit codes: 0 on success, 1 on mismatches, corrupt artifacts, or bad
//! configuration, 2 when the image file is missing.

use std::path::PathBuf;

use clap::Parser;
use log2rom_spec::{FixedFormat, FormatError, TableConfig, DEFAULT_IMAGE_NAME};
use log2rom_validator::{validate_file, DEFAULT_TOLERANCE};

/// Validate a fixed-point log2 ROM image against its reference law
#[derive(Parser, Debug)]
#[command(name = "log2val")]
#[command(about = "Validate a fixed-point log2 ROM image against its reference law")]
#[command(version)]
struct Args {
    /// Total bit width of ROM addresses
    #[arg(long, default_value_t = 17)]
    input_total_bits: u8,

    /// Fractional bits of ROM addresses
    #[arg(long, default_value_t = 10)]
    input_frac_bits: u8,

    /// Total bit width of ROM entries
    #[arg(long, default_value_t = 28)]
    output_total_bits: u8,

    /// Fractional bits of ROM entries
    #[arg(long, default_value_t = 23)]
    output_frac_bits: u8,

    /// Comparison tolerance in the real domain
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// ROM image to validate
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    image: PathBuf,
}

fn table_config(args: &Args) -> Result<TableConfig, FormatError> {
    TableConfig::new(
        FixedFormat::new(args.input_total_bits, args.input_frac_bits)?,
        FixedFormat::new(args.output_total_bits, args.output_frac_bits)?,
    )
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match table_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Validating {} ({})", args.image.display(), config);

    match validate_file(&args.image, &config, args.tolerance) {
        Ok(report) => {
            for mismatch in &report.mismatches {
                print!("{mismatch}");
            }

            tracing::info!(
                "Checked {} entries: {}",
                report.entries_checked,
                report.stats
            );

            println!("{}", report.verdict());
            std::process::exit(i32::from(report.exit_code()));
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(i32::from(e.exit_code()));
        }
    }
}
