//! Page rasterization: the capability boundary between the search and the
//! PDF rendering library.

pub mod jpeg;
pub mod pdfium;

pub use pdfium::{bind_pdfium, PdfiumRenderer};

use crate::error::ReduceError;

/// A decoded raster for one page. Transient: encoded to JPEG immediately
/// after creation, never persisted.
#[derive(Debug, Clone)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel (3 = RGB, 4 = RGBA)
    pub channels: u8,
    /// Row-major interleaved samples, `width * height * channels` bytes
    pub samples: Vec<u8>,
}

impl Pixmap {
    pub fn rgb(width: u32, height: u32, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            channels: 3,
            samples,
        }
    }

    pub fn rgba(width: u32, height: u32, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            channels: 4,
            samples,
        }
    }

    /// Opaque RGB samples, flattening any alpha channel onto white.
    pub fn to_rgb(&self) -> Vec<u8> {
        match self.channels {
            4 => {
                let mut rgb = Vec::with_capacity((self.width * self.height * 3) as usize);
                for pixel in self.samples.chunks_exact(4) {
                    let alpha = pixel[3] as u32;
                    for &channel in &pixel[..3] {
                        let flattened = (channel as u32 * alpha + 255 * (255 - alpha)) / 255;
                        rgb.push(flattened as u8);
                    }
                }
                rgb
            }
            _ => self.samples.clone(),
        }
    }
}

/// Read-only view of an open document's pages.
///
/// The search logic only ever sees this trait, so it can be driven by a
/// synthetic renderer in tests while production uses [`PdfiumRenderer`].
/// Implementations must render from the original document on every call;
/// nothing may leak from one quality probe to the next.
pub trait PageRenderer {
    fn page_count(&self) -> usize;

    fn render_page(&self, index: usize, dpi: u16) -> Result<Pixmap, ReduceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_passthrough() {
        let pixmap = Pixmap::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(pixmap.to_rgb(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_transparent_pixels_flatten_to_white() {
        let pixmap = Pixmap::rgba(2, 1, vec![10, 20, 30, 0, 100, 150, 200, 255]);
        let rgb = pixmap.to_rgb();
        // Fully transparent becomes white; fully opaque keeps its color.
        assert_eq!(&rgb[..3], &[255, 255, 255]);
        assert_eq!(&rgb[3..], &[100, 150, 200]);
    }

    #[test]
    fn test_half_transparent_blends_toward_white() {
        let pixmap = Pixmap::rgba(1, 1, vec![0, 0, 0, 128]);
        let rgb = pixmap.to_rgb();
        // Black at ~50% alpha over white lands near mid-gray.
        assert!(rgb.iter().all(|&c| (120..=135).contains(&c)), "{rgb:?}");
    }
}
