use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_DPI, DEFAULT_MAX_ITERATIONS};

#[derive(Parser, Debug)]
#[command(name = "pdf-reducer")]
#[command(
    author,
    version,
    about = "Shrink PDFs to a target file size by rasterizing pages and binary-searching JPEG quality"
)]
pub struct Args {
    /// PDF files to compress
    pub inputs: Vec<PathBuf>,

    /// Maximum acceptable output size in KB
    #[arg(short = 't', long)]
    pub target_kb: f64,

    /// Rendering DPI for pages (lower = smaller, blurrier output)
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: u16,

    /// Directory for compressed files (omit to overwrite originals in place)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of quality probes per file; each probe re-renders every page
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
