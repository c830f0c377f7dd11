//! Lossy page encoding via `jpeg-encoder`.

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder, SamplingFactor};

use crate::error::ReduceError;

use super::Pixmap;

/// Encode a pixmap as a baseline JPEG at the given quality.
///
/// Alpha, if present, is flattened onto an opaque white background first;
/// chroma is subsampled 4:2:0, which is where most of the size win at low
/// quality comes from.
pub fn pixmap_to_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>, ReduceError> {
    let rgb = RgbImage::from_raw(pixmap.width, pixmap.height, pixmap.to_rgb()).ok_or_else(
        || ReduceError::JpegEncode("raster buffer does not match its dimensions".to_string()),
    )?;

    let width = u16::try_from(pixmap.width)
        .map_err(|_| ReduceError::JpegEncode(format!("page too wide: {} px", pixmap.width)))?;
    let height = u16::try_from(pixmap.height)
        .map_err(|_| ReduceError::JpegEncode(format!("page too tall: {} px", pixmap.height)))?;

    let mut jpeg_bytes = Vec::new();
    let mut encoder = Encoder::new(&mut jpeg_bytes, quality);
    encoder.set_sampling_factor(SamplingFactor::R_4_2_0);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| ReduceError::JpegEncode(e.to_string()))?;

    Ok(jpeg_bytes)
}
