use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("target size must be positive")]
    InvalidTarget,

    #[error("iteration cap must be at least 1")]
    InvalidIterationCap,

    #[error("Pdfium library not available: {0}")]
    PdfiumMissing(String),

    #[error("failed to open {path}: {message}")]
    DocumentOpen { path: String, message: String },

    #[error("failed to render page {page}: {message}")]
    PageRender { page: usize, message: String },

    #[error("JPEG encoding failed: {0}")]
    JpegEncode(String),

    #[error("PDF assembly error: {0}")]
    Assembly(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("target size must be a positive number of kilobytes, got {0}")]
    InvalidTargetKb(f64),

    #[error("DPI must be positive")]
    InvalidDpi,
}
