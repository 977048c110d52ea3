//! Log2 ROM Generator
//!
//! Generates the fixed-point base-2 logarithm lookup table consumed by the
//! rasterizer RTL: a `$readmemb` text image plus a binary sidecar recording
//! the formats it was generated under.
//!
//! # Usage
//!
//! ```bash
//! # Default 17/10 -> 28/23 table, written to log2_rom.mem
//! log2gen
//!
//! # Custom formats and output path
//! log2gen --input-total-bits 12 --input-frac-bits 8 \
//!         --output-total-bits 24 --output-frac-bits 20 \
//!         --output custom_rom.mem
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log2rom_generator::generate_to_file;
use log2rom_spec::{FixedFormat, TableConfig, DEFAULT_IMAGE_NAME};

/// Generate the fixed-point log2 ROM image for the rasterizer
#[derive(Parser, Debug)]
#[command(name = "log2gen")]
#[command(about = "Generate the fixed-point log2 ROM image for the rasterizer")]
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

    /// Output image path (the sidecar is written next to it)
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = TableConfig::new(
        FixedFormat::new(args.input_total_bits, args.input_frac_bits)?,
        FixedFormat::new(args.output_total_bits, args.output_frac_bits)?,
    )?;

    tracing::info!("Table: {}", config);
    tracing::info!("Entries: {}", config.address_count());

    generate_to_file(&config, &args.output)?;

    println!(
        "Logarithm ROM data file written to {}",
        args.output.display()
    );

    Ok(())
}
