//! High-level entry point for drawing onto existing PDF documents

use crate::canvas::{Canvas, PdfCanvas};
use crate::error::{DrawError, Result};
use crate::geometry::Rectangle;
use crate::instructions::{
    read_instructions, DrawOperation, Instruction, LineParams, ProcessSummary, RectangleParams,
    Reporter, TextParams, TracingReporter,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Draws rectangles, lines and text onto the pages of a document
///
/// Pages are addressed by 1-based page numbers. Coordinates are relative to
/// the top-left corner of the visible page box, with y growing downward.
///
/// # Example
///
/// ```rust,no_run
/// use pdf_drawer::{PdfDrawer, RectangleParams};
///
/// # fn main() -> pdf_drawer::Result<()> {
/// let mut drawer = PdfDrawer::open("input.pdf")?;
/// drawer.draw_rectangle(1, &RectangleParams::new(10.0, 20.0, 110.0, 70.0))?;
/// drawer.process_instruction_file("drawings.tsv")?;
/// drawer.save("output.pdf")?;
/// # Ok(())
/// # }
/// ```
pub struct PdfDrawer<C: Canvas = PdfCanvas> {
    canvas: C,
}

impl PdfDrawer<PdfCanvas> {
    /// Open a PDF file for drawing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_canvas(PdfCanvas::open(path)?))
    }

    /// Load a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::with_canvas(PdfCanvas::from_bytes(bytes)?))
    }
}

impl<C: Canvas> PdfDrawer<C> {
    pub fn with_canvas(canvas: C) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Translate a 1-based page number into a canvas page index
    fn page_index(&self, page: u32) -> Result<usize> {
        let index = page as usize;
        if page == 0 || index > self.canvas.page_count() {
            return Err(DrawError::InvalidPageNumber(page));
        }
        Ok(index - 1)
    }

    pub fn draw_rectangle(&mut self, page: u32, params: &RectangleParams) -> Result<()> {
        let index = self.page_index(page)?;
        self.canvas.draw_rectangle(index, params)
    }

    pub fn draw_line(&mut self, page: u32, params: &LineParams) -> Result<()> {
        let index = self.page_index(page)?;
        self.canvas.draw_line(index, params)
    }

    pub fn draw_text(&mut self, page: u32, params: &TextParams) -> Result<()> {
        let index = self.page_index(page)?;
        self.canvas.draw_text(index, params)
    }

    /// Restrict the visible area of a page
    ///
    /// The box is clamped to the current page bounds; the applied box is
    /// returned.
    pub fn crop_page(&mut self, page: u32, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Rectangle> {
        let index = self.page_index(page)?;
        let size = self.canvas.page_size(index)?;
        let crop_box = Rectangle::new(x0, y0, x1, y1).clamp_to(size.width, size.height);
        if crop_box.is_degenerate() {
            tracing::warn!(page, "Crop box has no area after clamping to the page");
        }
        self.canvas.crop_page(index, crop_box)?;
        Ok(crop_box)
    }

    /// Keep exactly the given pages, in the given order
    ///
    /// A page number may appear more than once; each occurrence becomes its
    /// own page.
    pub fn select_pages(&mut self, pages: &[u32]) -> Result<()> {
        if pages.is_empty() {
            return Err(DrawError::InvalidPageSelection(
                "No pages selected".to_string(),
            ));
        }
        let indices = pages
            .iter()
            .map(|&page| self.page_index(page))
            .collect::<Result<Vec<_>>>()?;
        self.canvas.select_pages(&indices)
    }

    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.canvas.save(path.as_ref())
    }

    /// Apply a single parsed instruction
    pub fn apply(&mut self, instruction: &Instruction) -> Result<()> {
        match &instruction.operation {
            DrawOperation::Rectangle(params) => self.draw_rectangle(instruction.page, params),
            DrawOperation::Line(params) => self.draw_line(instruction.page, params),
            DrawOperation::Text(params) => self.draw_text(instruction.page, params),
        }
    }

    /// Process an instruction file, reporting unknown instructions through `tracing`
    pub fn process_instruction_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ProcessSummary> {
        self.process_instruction_file_with(path, &mut TracingReporter)
    }

    /// Process an instruction file with a custom reporter
    pub fn process_instruction_file_with<P: AsRef<Path>>(
        &mut self,
        path: P,
        reporter: &mut dyn Reporter,
    ) -> Result<ProcessSummary> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "Processing instruction file");
        self.process_instructions(BufReader::new(file), reporter)
    }

    /// Process instructions from any buffered reader
    pub fn process_instructions<R: BufRead>(
        &mut self,
        reader: R,
        reporter: &mut dyn Reporter,
    ) -> Result<ProcessSummary> {
        let summary = read_instructions(reader, reporter, |instruction| self.apply(instruction))?;
        tracing::info!(
            lines = summary.lines,
            applied = summary.applied,
            skipped = summary.skipped,
            unknown = summary.unknown,
            "Processed drawing instructions"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasCall, RecordingCanvas};
    use crate::geometry::PageSize;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn drawer(pages: usize) -> PdfDrawer<RecordingCanvas> {
        PdfDrawer::with_canvas(RecordingCanvas::with_pages(pages, PageSize::new(200.0, 100.0)))
    }

    #[test]
    fn test_page_numbers_are_one_based() {
        let mut drawer = drawer(2);
        let line = LineParams::new(0.0, 0.0, 1.0, 1.0);

        drawer.draw_line(2, &line).unwrap();
        assert_eq!(
            drawer.canvas().calls(),
            &[CanvasCall::Line {
                page: 1,
                params: line.clone()
            }]
        );

        assert!(matches!(
            drawer.draw_line(0, &line),
            Err(DrawError::InvalidPageNumber(0))
        ));
        assert!(matches!(
            drawer.draw_line(3, &line),
            Err(DrawError::InvalidPageNumber(3))
        ));
    }

    #[test]
    fn test_crop_is_clamped() {
        let mut drawer = drawer(1);
        let applied = drawer.crop_page(1, -10.0, 20.0, 500.0, 80.0).unwrap();
        assert_eq!(applied, Rectangle::new(0.0, 20.0, 200.0, 80.0));

        let applied = drawer.crop_page(1, 50.0, 60.0, 10.0, 10.0).unwrap();
        assert_eq!(applied, Rectangle::new(10.0, 10.0, 50.0, 60.0));
    }

    #[test]
    fn test_select_pages_translates_numbers() {
        let mut drawer = drawer(5);
        drawer.select_pages(&[3, 1]).unwrap();
        assert_eq!(
            drawer.canvas().calls(),
            &[CanvasCall::Select(vec![2, 0])]
        );
        assert_eq!(drawer.page_count(), 2);

        assert!(matches!(
            drawer.select_pages(&[]),
            Err(DrawError::InvalidPageSelection(_))
        ));
        assert!(matches!(
            drawer.select_pages(&[3]),
            Err(DrawError::InvalidPageNumber(3))
        ));
    }

    #[test]
    fn test_process_instructions() {
        let mut drawer = drawer(2);
        let mut unknown = Vec::new();
        let input = "% comment\nR\t1\t10\t10\t50\t50\nX\tbogus\nT\t2\t5\t5\tHi\n";

        let summary = drawer
            .process_instructions(Cursor::new(input), &mut |line: usize, _: &str| {
                unknown.push(line)
            })
            .unwrap();

        assert_eq!(
            summary,
            ProcessSummary {
                lines: 4,
                applied: 2,
                skipped: 1,
                unknown: 1
            }
        );
        assert_eq!(unknown, vec![3]);
        assert_eq!(drawer.canvas().calls().len(), 2);
    }

    #[test]
    fn test_process_stops_on_invalid_page() {
        let mut drawer = drawer(1);
        let input = "L\t1\t0\t0\t1\t1\nL\t2\t0\t0\t1\t1\nL\t1\t0\t0\t1\t1\n";
        let error = drawer
            .process_instructions(Cursor::new(input), &mut TracingReporter)
            .unwrap_err();

        assert_eq!(error.line(), Some(2));
        assert_eq!(error.to_string(), "Line 2: Invalid page number: 2");
        assert_eq!(drawer.canvas().calls().len(), 1);
    }
}
