//! Final candidate selection and output destination resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::state::{Candidate, SearchState};

/// What to do with one input file after its search has finished.
#[derive(Debug)]
pub enum Outcome {
    /// Write the candidate over the resolved output path.
    Replace {
        candidate: Candidate,
        /// Whether the candidate met the target or is merely the closest
        /// achievable above it
        within_target: bool,
    },
    /// Leave the original untouched.
    Keep,
}

/// Choose the final candidate from a finished search.
///
/// Prefers the best feasible candidate, falls back to the best infeasible
/// one, and declines entirely when neither exists. A candidate that is not
/// strictly smaller than the original is overridden to [`Outcome::Keep`]:
/// the tool never replaces a file with something equal or larger.
pub fn select(state: SearchState, original_size: u64, target_bytes: u64) -> Outcome {
    let chosen = match (state.best_under, state.best_over) {
        (Some(under), _) => under,
        (None, Some(over)) => over,
        (None, None) => return Outcome::Keep,
    };

    if chosen.size >= original_size {
        return Outcome::Keep;
    }

    let within_target = chosen.size <= target_bytes;
    Outcome::Replace {
        candidate: chosen,
        within_target,
    }
}

/// Resolve where a replacement should be written.
///
/// With an output directory the compressed file keeps the original filename
/// and missing directories are created; without one the input is overwritten
/// in place.
pub fn resolve_output_path(input: &Path, output_dir: Option<&Path>) -> io::Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let name = input.file_name().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "input path has no file name")
            })?;
            Ok(dir.join(name))
        }
        None => Ok(input.to_path_buf()),
    }
}
