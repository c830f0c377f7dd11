use std::path::PathBuf;

use crate::cli::Args;
use crate::error::ConfigError;

use super::defaults::*;

/// Runtime settings for one compression run.
///
/// Immutable once built; every file in the batch is processed against the
/// same target.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Maximum acceptable output size in bytes
    pub target_bytes: u64,

    /// Rendering resolution for page rasters
    pub dpi: u16,

    /// Cap on quality probes (builder invocations) per file
    pub max_iterations: u32,

    /// Where compressed files are written; `None` overwrites inputs in place
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Build settings from CLI arguments, validating the numeric knobs.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if !args.target_kb.is_finite() || args.target_kb <= 0.0 {
            return Err(ConfigError::InvalidTargetKb(args.target_kb));
        }
        if args.dpi == 0 {
            return Err(ConfigError::InvalidDpi);
        }

        Ok(Self {
            target_bytes: (args.target_kb * BYTES_PER_KB) as u64,
            dpi: args.dpi,
            max_iterations: args.max_iterations,
            output_dir: args.output_dir.clone(),
        })
    }

    /// Target size expressed in kilobytes, for reporting.
    pub fn target_kb(&self) -> f64 {
        self.target_bytes as f64 / BYTES_PER_KB
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("argv should parse")
    }

    #[test]
    fn test_target_kb_converts_to_bytes() {
        let args = args(&["pdf-reducer", "a.pdf", "--target-kb", "500"]);
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.target_bytes, 512_000);
        assert_eq!(settings.dpi, DEFAULT_DPI);
        assert_eq!(settings.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(settings.output_dir.is_none());
    }

    #[test]
    fn test_fractional_target_truncates() {
        let args = args(&["pdf-reducer", "a.pdf", "--target-kb", "0.5"]);
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.target_bytes, 512);
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let args = args(&["pdf-reducer", "a.pdf", "--target-kb=-10"]);
        assert!(matches!(
            Settings::from_args(&args),
            Err(ConfigError::InvalidTargetKb(_))
        ));

        let args = self::args(&["pdf-reducer", "a.pdf", "--target-kb", "0"]);
        assert!(Settings::from_args(&args).is_err());
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let args = args(&["pdf-reducer", "a.pdf", "--target-kb", "500", "--dpi", "0"]);
        assert!(matches!(
            Settings::from_args(&args),
            Err(ConfigError::InvalidDpi)
        ));
    }

    #[test]
    fn test_target_kb_round_trips_for_reporting() {
        let args = args(&["pdf-reducer", "a.pdf", "--target-kb", "250"]);
        let settings = Settings::from_args(&args).unwrap();
        assert!((settings.target_kb() - 250.0).abs() < f64::EPSILON);
    }
}
