//! Bitshade CLI — inspect bitmaps and apply the core transforms.
//!
//! Usage:
//!   bitshade info   <input> [--json]
//!   bitshade apply  <input> <grayscale|dither|auto-level|original> -o <out>
//!   bitshade crop   <input> --region x,y,w,h -o <out>

mod error;
mod region;

use std::path::{Path, PathBuf};
use std::process;

use bitshade_core::codec::limits::DEFAULT_MAX_DIMENSION;
use bitshade_core::{CodecLimits, EncodeOptions, RowOrder, Session, probe};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::region::parse_region;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BITSHADE_LOG";

#[derive(Parser)]
#[command(name = "bitshade", version, about = "Bitmap grayscale, dither, auto-level and crop")]
struct Cli {
    /// Largest accepted width or height. Defaults to $BITSHADE_MAX_DIMENSION
    /// or 16384.
    #[arg(long, global = true)]
    max_dimension: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header information of a bitmap
    Info {
        /// Input .bmp file
        input: PathBuf,
        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a whole-image transform and write the result
    Apply {
        /// Input .bmp file
        input: PathBuf,
        /// Transform to apply
        #[arg(value_enum)]
        operation: Operation,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Crop a rectangle and write the result
    Crop {
        /// Input .bmp file
        input: PathBuf,
        /// Region as x,y,width,height
        #[arg(long)]
        region: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output file; `.bmp` is appended when missing
    #[arg(short, long)]
    output: PathBuf,
    /// Store rows top-down instead of bottom-up
    #[arg(long)]
    top_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    Original,
    Grayscale,
    Dither,
    AutoLevel,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let limits = resolve_limits(cli.max_dimension);

    let result = match cli.command {
        Commands::Info { input, json } => cmd_info(&input, json, &limits),
        Commands::Apply {
            input,
            operation,
            output,
        } => cmd_apply(&input, operation, &output, &limits).map(drop),
        Commands::Crop {
            input,
            region,
            output,
        } => cmd_crop(&input, &region, &output, &limits).map(drop),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The command-line flag wins over the environment; zero means "default".
fn resolve_limits(flag: Option<u32>) -> CodecLimits {
    match flag.filter(|&v| v > 0) {
        Some(max_dimension) => CodecLimits { max_dimension },
        None => CodecLimits::from_env(),
    }
}

fn encode_options(output: &OutputArgs, limits: &CodecLimits) -> EncodeOptions {
    EncodeOptions {
        row_order: if output.top_down {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        },
        limits: *limits,
    }
}

fn open(input: &Path, limits: &CodecLimits) -> Result<Session, CliError> {
    Session::open_with_limits(input, limits).map_err(|e| CliError::decode(input, e))
}

fn cmd_info(input: &Path, json: bool, limits: &CodecLimits) -> Result<(), CliError> {
    let bytes = std::fs::read(input).map_err(|e| CliError::decode(input, e.into()))?;
    let info = probe(&bytes).map_err(|e| CliError::decode(input, e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Bitshade Bitmap Info:");
    println!("  File:         {}", input.display());
    println!("  Dimensions:   {}x{}", info.width, info.height);
    println!("  Bit depth:    {}", info.bits_per_pixel);
    println!("  Header:       {} ({} bytes)", info.header.label(), info.header.size());
    println!("  Row order:    {:?}", info.row_order);
    println!("  Row stride:   {} bytes", info.stride());
    println!("  Pixel offset: {}", info.pixel_offset);
    println!("  File size:    {} bytes", bytes.len());
    if !limits.allows(info.width, info.height) {
        println!(
            "  Note:         exceeds the {} px limit (default {DEFAULT_MAX_DIMENSION})",
            limits.max_dimension
        );
    }
    Ok(())
}

fn cmd_apply(
    input: &Path,
    operation: Operation,
    output: &OutputArgs,
    limits: &CodecLimits,
) -> Result<PathBuf, CliError> {
    let mut session = open(input, limits)?;
    match operation {
        Operation::Original => session.show_original(),
        Operation::Grayscale => session.grayscale(),
        Operation::Dither => session.dither(),
        Operation::AutoLevel => session.auto_level(),
    };
    write_current(&session, output, limits)
}

fn cmd_crop(
    input: &Path,
    region: &str,
    output: &OutputArgs,
    limits: &CodecLimits,
) -> Result<PathBuf, CliError> {
    let region = parse_region(region)?;
    let mut session = open(input, limits)?;
    session.crop(region)?;
    write_current(&session, output, limits)
}

fn write_current(
    session: &Session,
    output: &OutputArgs,
    limits: &CodecLimits,
) -> Result<PathBuf, CliError> {
    let written = session.export_with(&output.output, &encode_options(output, limits))?;
    tracing::info!(view = session.state().label(), path = %written.display(), "wrote image");
    println!("{}", written.display());
    Ok(written)
}
