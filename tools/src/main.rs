use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytewise_tools::{
    decode_fields, encode_fields, format_decode_pretty, split_values, Layout, Limits,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bytewise-tools",
    version,
    about = "Decode and encode binary buffers with runtime layouts"
)]
struct Cli {
    /// Lift the default input and field-count limits.
    #[arg(long, global = true)]
    unlimited: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a file into typed fields.
    Decode {
        /// Path to the input bytes.
        file: PathBuf,
        /// Comma-separated fields, e.g. `u32,be:u16,bool,le:u32`.
        #[arg(long)]
        layout: String,
        /// Byte offset to start decoding at.
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Encode comma-separated values into a file.
    Encode {
        /// Comma-separated fields, e.g. `u32,be:u16,bool,le:u32`.
        #[arg(long)]
        layout: String,
        /// Comma-separated values, one per field.
        #[arg(long)]
        values: String,
        /// Output path.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the encoded size of a layout.
    Size {
        /// Comma-separated fields, e.g. `u32,be:u16,bool,le:u32`.
        #[arg(long)]
        layout: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let limits = if cli.unlimited {
        Limits::unlimited()
    } else {
        Limits::default()
    };

    match cli.command {
        Command::Decode {
            file,
            layout,
            offset,
            format,
        } => {
            let layout = parse_layout(&layout)?;
            let bytes = read_input(&file, &limits)?;
            let report = decode_fields(&bytes, offset, &layout, &limits)
                .with_context(|| format!("decode {}", file.display()))?;
            if !report.is_complete() {
                warn!(layout = %report.layout, "input ended before the layout did");
            }
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&report));
                }
            }
        }
        Command::Encode {
            layout,
            values,
            output,
        } => {
            let layout = parse_layout(&layout)?;
            let values = split_values(&values);
            let bytes = encode_fields(&layout, &values, &limits).context("encode values")?;
            fs::write(&output, &bytes)
                .with_context(|| format!("write output {}", output.display()))?;
            info!(bytes = bytes.len(), path = %output.display(), "wrote encoded values");
        }
        Command::Size { layout } => {
            let layout = parse_layout(&layout)?;
            println!("{}", layout.byte_count());
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_layout(text: &str) -> Result<Layout> {
    let layout: Layout = text
        .parse()
        .with_context(|| format!("parse layout '{text}'"))?;
    debug!(%layout, bytes = layout.byte_count(), "parsed layout");
    Ok(layout)
}

fn read_input(path: &Path, limits: &Limits) -> Result<Vec<u8>> {
    let len = fs::metadata(path)
        .with_context(|| format!("stat input {}", path.display()))?
        .len();
    limits
        .check_input(usize::try_from(len).unwrap_or(usize::MAX))
        .with_context(|| format!("input {}", path.display()))?;
    let bytes = fs::read(path).with_context(|| format!("read input {}", path.display()))?;
    debug!(bytes = bytes.len(), path = %path.display(), "read input");
    Ok(bytes)
}
