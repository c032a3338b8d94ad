//! rootdec CLI - decode keyed numeral roots to decimal

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use rootdec::{JsonFormat, RootDecoder};

#[derive(Parser)]
#[command(name = "rootdec")]
#[command(version)]
#[command(about = "Decode keyed numeral roots to decimal", long_about = None)]
struct Cli {
    /// Input document
    #[arg(value_name = "FILE", env = "ROOTDEC_INPUT", default_value = "input.json")]
    input: PathBuf,

    /// Section marker that precedes the keys and roots
    #[arg(long, default_value = rootdec::parser::DEFAULT_MARKER)]
    marker: String,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,

    /// Output compact JSON (implies --json)
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let format = if cli.compact {
        Some(JsonFormat::Compact)
    } else if cli.json {
        Some(JsonFormat::Pretty)
    } else {
        None
    };

    if let Err(e) = cmd_decode(&cli.input, &cli.marker, format) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_decode(
    input: &Path,
    marker: &str,
    format: Option<JsonFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Decoding {}", input.display());

    let result = RootDecoder::new().with_marker(marker).decode(input)?;

    match format {
        Some(format) => println!("{}", result.to_json(format)?),
        None => print!("{}", result.to_text()),
    }

    Ok(())
}
