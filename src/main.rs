use anyhow::{Context, Result};
use clap::Parser;

use pdf_reducer::cli::Args;
use pdf_reducer::config::Settings;
use pdf_reducer::render::bind_pdfium;
use pdf_reducer::{reduce_file, Reduction, ReductionResult};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; quality probes are reported at info level
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    if args.inputs.is_empty() {
        println!("No input files given. Nothing to do.");
        return Ok(());
    }

    let settings = Settings::from_args(&args).context("Invalid configuration")?;

    // Bind the rendering library before touching any file; absence is fatal.
    let pdfium = bind_pdfium().context(
        "Pdfium is required for page rendering. Install the Pdfium library \
         or place it next to the executable",
    )?;

    log::info!("Processing {} file(s)", args.inputs.len());

    let mut failures = 0usize;
    for input in &args.inputs {
        println!("Processing: {}", input.display());
        match reduce_file(&pdfium, input, &settings) {
            Ok(reduction) => report(&reduction, &settings),
            Err(e) => {
                failures += 1;
                log::error!("{}: {}", input.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} file(s) failed", failures);
    }

    Ok(())
}

fn report(reduction: &Reduction, settings: &Settings) {
    println!("  Original size: {:.1} KB", kb(reduction.original_size));

    match &reduction.result {
        ReductionResult::Written {
            path,
            size,
            quality,
            within_target,
        } => {
            let status = if *within_target {
                "within target"
            } else {
                "above target (best possible)"
            };
            println!("  Saved: {}", path.display());
            println!(
                "    Size: {:.1} KB at quality {} (target {:.1} KB, {})",
                kb(*size),
                quality,
                settings.target_kb(),
                status
            );
        }
        ReductionResult::Kept => {
            println!("  Could not beat the original with this method; keeping the original file.");
        }
    }
}

fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}
