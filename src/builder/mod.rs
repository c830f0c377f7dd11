//! Candidate construction: rasterize every page, encode each raster as a
//! JPEG, and assemble an image-only PDF.

use std::io::Cursor;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::ReduceError;
use crate::render::{jpeg::pixmap_to_jpeg, PageRenderer};
use crate::search::Candidate;

/// Produces one complete rebuilt document at a given quality.
///
/// A builder must be callable repeatedly and independently per quality
/// value: every call works from the original document, never from a
/// previous candidate. Higher quality is expected to produce no smaller
/// output, but callers must not rely on that.
pub trait CandidateBuilder {
    fn build(&self, quality: u8) -> Result<Candidate, ReduceError>;
}

/// One page of a rebuilt document: encoded JPEG plus its pixel dimensions,
/// which double as the page size in PDF units.
pub struct JpegPage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The production builder: renders through a [`PageRenderer`] at a fixed
/// DPI and rebuilds a flattened, image-only PDF per probe.
pub struct FlattenedPdfBuilder<'a> {
    renderer: &'a dyn PageRenderer,
    dpi: u16,
}

impl<'a> FlattenedPdfBuilder<'a> {
    pub fn new(renderer: &'a dyn PageRenderer, dpi: u16) -> Self {
        Self { renderer, dpi }
    }
}

impl CandidateBuilder for FlattenedPdfBuilder<'_> {
    fn build(&self, quality: u8) -> Result<Candidate, ReduceError> {
        let page_count = self.renderer.page_count();
        let mut pages = Vec::with_capacity(page_count);

        for index in 0..page_count {
            let pixmap = self.renderer.render_page(index, self.dpi)?;
            let data = pixmap_to_jpeg(&pixmap, quality)?;
            pages.push(JpegPage {
                data,
                width: pixmap.width,
                height: pixmap.height,
            });
        }

        let bytes = assemble_pdf(&pages)?;
        Ok(Candidate::new(bytes, quality))
    }
}

/// Assemble an image-only PDF, one full-bleed JPEG per page, preserving
/// page order. A zero-page input yields a valid PDF with an empty page
/// tree.
pub fn assemble_pdf(pages: &[JpegPage]) -> Result<Vec<u8>, ReduceError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => page.width as i64,
                "Height" => page.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            page.data.clone(),
        ));

        // Scale the unit image square up to the full page.
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (page.width as i64).into(),
                        0.into(),
                        0.into(),
                        (page.height as i64).into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (page.width as i64).into(),
                (page.height as i64).into(),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    "Im0" => image_id,
                },
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    // JPEG streams already carry a filter; this only deflates the rest.
    doc.compress();

    let mut buffer = Cursor::new(Vec::new());
    doc.save_to(&mut buffer)?;
    Ok(buffer.into_inner())
}
