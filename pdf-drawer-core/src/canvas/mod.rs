//! Drawing surfaces
//!
//! A [`Canvas`] addresses pages by 0-based index and takes page-relative
//! coordinates (origin at the top-left corner, y growing downward).
//! Translation from user-facing 1-based page numbers happens in
//! [`crate::PdfDrawer`].

mod pdf;
mod recording;

pub use pdf::PdfCanvas;
pub use recording::{CanvasCall, RecordingCanvas};

use crate::error::Result;
use crate::geometry::{PageSize, Rectangle};
use crate::instructions::{LineParams, RectangleParams, TextParams};
use std::path::Path;

/// Operations a drawing backend provides
pub trait Canvas {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Size of the visible page box
    fn page_size(&self, page: usize) -> Result<PageSize>;

    fn draw_rectangle(&mut self, page: usize, params: &RectangleParams) -> Result<()>;

    fn draw_line(&mut self, page: usize, params: &LineParams) -> Result<()>;

    fn draw_text(&mut self, page: usize, params: &TextParams) -> Result<()>;

    /// Set the visible box of a page; `crop_box` is already within the page
    fn crop_page(&mut self, page: usize, crop_box: Rectangle) -> Result<()>;

    /// Keep exactly `pages`, in the given order; an index may repeat
    fn select_pages(&mut self, pages: &[usize]) -> Result<()>;

    /// Write the document to `path`
    fn save(&mut self, path: &Path) -> Result<()>;
}
