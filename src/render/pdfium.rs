//! Pdfium-backed page rendering.

use std::path::Path;

use pdfium_render::prelude::*;

use crate::error::ReduceError;

use super::{PageRenderer, Pixmap};

/// PDF user-space units per inch, for DPI-to-scale conversion.
const POINTS_PER_INCH: f32 = 72.0;

/// Bind the Pdfium library once at startup.
///
/// Tries a copy of the library next to the executable first, then the
/// system library. Absence is a fatal environment error reported before any
/// file is processed.
pub fn bind_pdfium() -> Result<Pdfium, ReduceError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ReduceError::PdfiumMissing(format!("{e:?}")))?;
    Ok(Pdfium::new(bindings))
}

/// An open document handle. Exactly one exists per input file and it is
/// dropped as soon as the search for that file completes.
pub struct PdfiumRenderer<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumRenderer<'a> {
    pub fn open(pdfium: &'a Pdfium, path: &Path) -> Result<Self, ReduceError> {
        let document =
            pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| ReduceError::DocumentOpen {
                    path: path.display().to_string(),
                    message: format!("{e:?}"),
                })?;
        Ok(Self { document })
    }
}

impl PageRenderer for PdfiumRenderer<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, dpi: u16) -> Result<Pixmap, ReduceError> {
        let render_error = |message: String| ReduceError::PageRender {
            page: index,
            message,
        };

        let page_index =
            u16::try_from(index).map_err(|_| render_error("page index out of range".into()))?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| render_error(format!("{e:?}")))?;

        let scale = f32::from(dpi) / POINTS_PER_INCH;
        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| render_error(format!("{e:?}")))?;

        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;
        Ok(Pixmap::rgba(width, height, bitmap.as_rgba_bytes()))
    }
}
