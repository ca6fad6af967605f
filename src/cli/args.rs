use clap::Parser;
use std::path::PathBuf;

use logoprep::types::OutputFormat;

#[derive(Parser)]
#[command(name = "logoprep", version, about = "LOGOPREP CLI")]
pub struct CliArgs {
    /// Input image file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output filename (defaults to overwriting the input in place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bounding box the image is scaled down to fit. Options:
    /// - Square: a single positive integer (e.g., 250)
    /// - Custom: WIDTHxHEIGHT (e.g., 250x100)
    #[arg(short = 's', long, default_value = "250x250")]
    pub size: String,

    /// Corner radius in pixels (0 disables rounding)
    #[arg(short = 'r', long, default_value_t = logoprep::DEFAULT_CORNER_RADIUS)]
    pub radius: u32,

    /// Output format (png or webp); inferred from the output extension when omitted
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
