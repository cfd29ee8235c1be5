use super::Canvas;
use crate::error::{DrawError, Result};
use crate::geometry::{PageSize, Rectangle};
use crate::instructions::{LineParams, RectangleParams, TextParams};
use crate::text::Font;
use std::path::{Path, PathBuf};

/// A call received by a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Rectangle { page: usize, params: RectangleParams },
    Line { page: usize, params: LineParams },
    Text { page: usize, params: TextParams },
    Crop { page: usize, crop_box: Rectangle },
    Select(Vec<usize>),
    Save(PathBuf),
}

/// In-memory canvas that records every call instead of drawing
///
/// Page indices and font names are validated the same way [`super::PdfCanvas`]
/// validates them, so it can stand in for a real document when testing
/// instruction processing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pages: Vec<PageSize>,
    calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    pub fn new(pages: Vec<PageSize>) -> Self {
        Self {
            pages,
            calls: Vec::new(),
        }
    }

    /// `count` pages of the same size
    pub fn with_pages(count: usize, size: PageSize) -> Self {
        Self::new(vec![size; count])
    }

    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    pub fn pages(&self) -> &[PageSize] {
        &self.pages
    }

    fn check_page(&self, page: usize) -> Result<()> {
        if page < self.pages.len() {
            Ok(())
        } else {
            Err(DrawError::PageIndexOutOfBounds(page, self.pages.len()))
        }
    }
}

impl Canvas for RecordingCanvas {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, page: usize) -> Result<PageSize> {
        self.check_page(page)?;
        Ok(self.pages[page])
    }

    fn draw_rectangle(&mut self, page: usize, params: &RectangleParams) -> Result<()> {
        self.check_page(page)?;
        self.calls.push(CanvasCall::Rectangle {
            page,
            params: params.clone(),
        });
        Ok(())
    }

    fn draw_line(&mut self, page: usize, params: &LineParams) -> Result<()> {
        self.check_page(page)?;
        self.calls.push(CanvasCall::Line {
            page,
            params: params.clone(),
        });
        Ok(())
    }

    fn draw_text(&mut self, page: usize, params: &TextParams) -> Result<()> {
        self.check_page(page)?;
        Font::from_name(&params.font_name)?;
        self.calls.push(CanvasCall::Text {
            page,
            params: params.clone(),
        });
        Ok(())
    }

    fn crop_page(&mut self, page: usize, crop_box: Rectangle) -> Result<()> {
        self.check_page(page)?;
        self.pages[page] = PageSize::new(crop_box.width(), crop_box.height());
        self.calls.push(CanvasCall::Crop { page, crop_box });
        Ok(())
    }

    fn select_pages(&mut self, pages: &[usize]) -> Result<()> {
        if pages.is_empty() {
            return Err(DrawError::InvalidPageSelection(
                "No pages selected".to_string(),
            ));
        }
        for &page in pages {
            self.check_page(page)?;
        }
        self.pages = pages.iter().map(|&page| self.pages[page]).collect();
        self.calls.push(CanvasCall::Select(pages.to_vec()));
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.calls.push(CanvasCall::Save(path.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_calls_in_order() {
        let mut canvas = RecordingCanvas::with_pages(2, PageSize::letter());
        let rect = RectangleParams::new(0.0, 0.0, 10.0, 10.0);
        let line = LineParams::new(0.0, 0.0, 5.0, 5.0);

        canvas.draw_rectangle(1, &rect).unwrap();
        canvas.draw_line(0, &line).unwrap();

        assert_eq!(
            canvas.calls(),
            &[
                CanvasCall::Rectangle {
                    page: 1,
                    params: rect
                },
                CanvasCall::Line {
                    page: 0,
                    params: line
                },
            ]
        );
    }

    #[test]
    fn test_rejects_out_of_range_page() {
        let mut canvas = RecordingCanvas::with_pages(1, PageSize::a4());
        let result = canvas.draw_line(1, &LineParams::new(0.0, 0.0, 1.0, 1.0));
        assert!(matches!(result, Err(DrawError::PageIndexOutOfBounds(1, 1))));
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn test_rejects_unknown_font() {
        let mut canvas = RecordingCanvas::with_pages(1, PageSize::a4());
        let text = TextParams::new(0.0, 0.0, "x").with_font("comic", 10.0);
        assert!(matches!(
            canvas.draw_text(0, &text),
            Err(DrawError::FontError(_))
        ));
    }

    #[test]
    fn test_select_reorders_and_duplicates_pages() {
        let mut canvas = RecordingCanvas::new(vec![
            PageSize::new(100.0, 100.0),
            PageSize::new(200.0, 200.0),
            PageSize::new(300.0, 300.0),
        ]);

        canvas.select_pages(&[2, 0, 2]).unwrap();
        assert_eq!(canvas.page_count(), 3);
        assert_eq!(canvas.page_size(0).unwrap().width, 300.0);
        assert_eq!(canvas.page_size(1).unwrap().width, 100.0);
        assert_eq!(canvas.page_size(2).unwrap().width, 300.0);

        assert!(canvas.select_pages(&[]).is_err());
        assert!(canvas.select_pages(&[5]).is_err());
    }

    #[test]
    fn test_crop_updates_page_size() {
        let mut canvas = RecordingCanvas::with_pages(1, PageSize::letter());
        canvas
            .crop_page(0, Rectangle::new(10.0, 10.0, 110.0, 60.0))
            .unwrap();
        assert_eq!(canvas.page_size(0).unwrap(), PageSize::new(100.0, 50.0));
    }
}
