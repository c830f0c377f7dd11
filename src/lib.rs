pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod search;

pub use builder::{CandidateBuilder, FlattenedPdfBuilder};
pub use config::Settings;
pub use error::{ConfigError, ReduceError};
pub use render::{PageRenderer, Pixmap};
pub use search::{search, select, Candidate, Outcome, SearchState};

use std::fs;
use std::path::{Path, PathBuf};

use pdfium_render::prelude::Pdfium;

use render::PdfiumRenderer;
use search::resolve_output_path;

/// Per-file report: what the search found and what was done about it.
#[derive(Debug)]
pub struct Reduction {
    pub original_size: u64,
    pub result: ReductionResult,
}

#[derive(Debug)]
pub enum ReductionResult {
    /// A smaller rebuild was written to `path`.
    Written {
        path: PathBuf,
        size: u64,
        quality: u8,
        within_target: bool,
    },
    /// No candidate beat the original; the input file is untouched.
    Kept,
}

/// Compress one PDF toward the target size.
///
/// Opens the document, binary-searches JPEG quality for the largest rebuild
/// at or under the target, and either writes the chosen candidate to the
/// resolved output path or keeps the original. The document handle is
/// released as soon as the search completes, before any write.
///
/// # Example
///
/// ```no_run
/// use pdf_reducer::config::Settings;
/// use pdf_reducer::render::bind_pdfium;
/// use pdf_reducer::reduce_file;
///
/// let pdfium = bind_pdfium().unwrap();
/// let settings = Settings {
///     target_bytes: 512_000,
///     dpi: 96,
///     max_iterations: 8,
///     output_dir: None,
/// };
/// let reduction = reduce_file(&pdfium, "report.pdf".as_ref(), &settings).unwrap();
/// println!("{reduction:?}");
/// ```
pub fn reduce_file(
    pdfium: &Pdfium,
    input: &Path,
    settings: &Settings,
) -> Result<Reduction, ReduceError> {
    let original_size = fs::metadata(input)?.len();

    let outcome = {
        let renderer = PdfiumRenderer::open(pdfium, input)?;
        let builder = FlattenedPdfBuilder::new(&renderer, settings.dpi);
        let state = search(
            |quality| builder.build(quality),
            settings.target_bytes,
            settings.max_iterations,
        )?;
        select(state, original_size, settings.target_bytes)
    };

    let result = match outcome {
        Outcome::Replace {
            candidate,
            within_target,
        } => {
            let path = resolve_output_path(input, settings.output_dir.as_deref())?;
            fs::write(&path, &candidate.bytes)?;
            ReductionResult::Written {
                path,
                size: candidate.size,
                quality: candidate.quality,
                within_target,
            }
        }
        Outcome::Keep => ReductionResult::Kept,
    };

    Ok(Reduction {
        original_size,
        result,
    })
}
