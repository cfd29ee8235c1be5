//! # pdf-drawer
//!
//! Overlay simple drawings (rectangles, lines and text) onto the pages of
//! existing PDF documents, either through the Rust API or from
//! tab-separated instruction files.
//!
//! ## Features
//!
//! - **Drawing**: Rectangles with optional filling, straight lines and single-line text
//! - **Opacity**: Separate border and fill opacity through shared ExtGState resources
//! - **Standard Fonts**: The 14 base fonts by short name (`helv`, `cour`, ...) or PDF name
//! - **Page Operations**: Crop pages and reduce a document to an ordered page selection
//! - **Instruction Files**: Line-oriented, tab-separated drawing instructions
//!
//! ## Coordinates
//!
//! All coordinates are in points relative to the top-left corner of the
//! visible page box, with y growing downward. Pages are numbered from 1.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_drawer::{Color, LineParams, PdfDrawer, RectangleParams, Result, TextParams};
//!
//! # fn main() -> Result<()> {
//! let mut drawer = PdfDrawer::open("input.pdf")?;
//!
//! drawer.draw_rectangle(
//!     1,
//!     &RectangleParams::new(10.0, 20.0, 110.0, 70.0)
//!         .with_border(2.0, Color::red(), 0.8)
//!         .with_fill(Color::green(), 0.5),
//! )?;
//! drawer.draw_line(1, &LineParams::new(0.0, 0.0, 100.0, 100.0))?;
//! drawer.draw_text(1, &TextParams::new(5.0, 15.0, "Hello").with_font("helv", 12.0))?;
//!
//! drawer.save("output.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Instruction Files
//!
//! ```text
//! % comment
//! R	1	10	20	110	70	2.0	rgb(1,0,0)	0.8	rgb(0,1,0)	0.5
//! L	1	0	0	100	100
//! T	1	5	5	Hello	helv	12
//! ```
//!
//! ```rust,no_run
//! use pdf_drawer::PdfDrawer;
//!
//! # fn main() -> pdf_drawer::Result<()> {
//! let mut drawer = PdfDrawer::open("input.pdf")?;
//! let summary = drawer.process_instruction_file("drawings.tsv")?;
//! println!("{} instructions applied", summary.applied);
//! drawer.save("output.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`instructions`] - Instruction file parsing and typed drawing parameters
//! - [`canvas`] - Drawing backends ([`PdfCanvas`], [`RecordingCanvas`])
//! - [`graphics`] - Colors, opacity states and content stream building
//! - [`text`] - Standard fonts and text encoding
//! - [`pages`] - Page selection lists

pub mod canvas;
#[cfg(feature = "compression")]
pub mod compression;
pub mod drawer;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod instructions;
pub mod pages;
pub mod text;

pub use canvas::{Canvas, CanvasCall, PdfCanvas, RecordingCanvas};
pub use drawer::PdfDrawer;
pub use error::{DrawError, Result};
pub use geometry::{PageSize, Point, Rectangle};
pub use graphics::{Color, ColorParseError, ExtGState, GraphicsContext, TextRenderMode};
pub use instructions::{
    DrawOperation, FieldError, Instruction, InstructionKind, LineParams, ProcessSummary,
    RectangleParams, Reporter, TextParams, TracingReporter,
};
pub use pages::{PageSelection, PageSpec};
pub use text::{Font, TextEncoding};

/// Current version of pdf-drawer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
