/// Default rendering resolution in DPI (typical screen resolution)
pub const DEFAULT_DPI: u16 = 96;

/// Default cap on quality probes per file; each probe is a full re-render
pub const DEFAULT_MAX_ITERATIONS: u32 = 8;

/// Lowest JPEG quality the search will probe
pub const QUALITY_MIN: u8 = 10;

/// Highest JPEG quality the search will probe
pub const QUALITY_MAX: u8 = 95;

/// Bytes per kilobyte for target-size conversion
pub const BYTES_PER_KB: f64 = 1024.0;
