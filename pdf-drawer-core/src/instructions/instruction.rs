//! Typed drawing instructions and their positional field layout
//!
//! | Tag | 1    | 2  | 3  | 4    | 5         | 6            | 7            | 8              | 9              | 10          | 11           |
//! |-----|------|----|----|------|-----------|--------------|--------------|----------------|----------------|-------------|--------------|
//! | `R` | page | x0 | y0 | x1   | y1        | border_width | border_color | border_opacity | fill_color     | fill_opacity |             |
//! | `L` | page | x0 | y0 | x1   | y1        | width        | color        | opacity        |                |             |              |
//! | `T` | page | x  | y  | text | font_name | font_size    | border_width | border_color   | border_opacity | fill_color  | fill_opacity |
//!
//! Coordinates are page-relative with the origin at the top-left corner of
//! the page and y growing downward.

use super::fields::{FieldError, Fields};
use crate::geometry::{Point, Rectangle};
use crate::graphics::Color;

pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;
pub const DEFAULT_BORDER_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};
pub const DEFAULT_BORDER_OPACITY: f64 = 1.0;
pub const DEFAULT_FILL_COLOR: Option<Color> = None;
pub const DEFAULT_FILL_OPACITY: f64 = 1.0;
pub const DEFAULT_FONT_NAME: &str = "helv";
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// A rectangle with a border and an optional filling.
///
/// `(x0, y0)` is the top-left corner and `(x1, y1)` the bottom-right corner.
/// Reversed corners describe the same box; see [`RectangleParams::bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleParams {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub border_width: f64,
    pub border_color: Color,
    pub border_opacity: f64,
    /// `None` leaves the rectangle unfilled
    pub fill_color: Option<Color>,
    pub fill_opacity: f64,
}

impl RectangleParams {
    /// A rectangle with default border and no filling
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            border_opacity: DEFAULT_BORDER_OPACITY,
            fill_color: DEFAULT_FILL_COLOR,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }

    pub fn with_border(mut self, width: f64, color: Color, opacity: f64) -> Self {
        self.border_width = width;
        self.border_color = color;
        self.border_opacity = opacity;
        self
    }

    pub fn with_fill(mut self, color: Color, opacity: f64) -> Self {
        self.fill_color = Some(color);
        self.fill_opacity = opacity;
        self
    }

    /// The normalised box covered by the rectangle
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x0, self.y0, self.x1, self.y1)
    }
}

/// A straight line segment from `(x0, y0)` to `(x1, y1)`
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub color: Color,
    pub opacity: f64,
}

impl LineParams {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            width: DEFAULT_BORDER_WIDTH,
            color: DEFAULT_BORDER_COLOR,
            opacity: DEFAULT_BORDER_OPACITY,
        }
    }

    pub fn with_stroke(mut self, width: f64, color: Color, opacity: f64) -> Self {
        self.width = width;
        self.color = color;
        self.opacity = opacity;
        self
    }

    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }
}

/// A single line of text whose baseline starts at `(x, y)`
///
/// Without a fill color the glyphs are filled with the border color. With a
/// fill color they are filled with it and outlined with the border color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_name: String,
    pub font_size: f64,
    pub border_width: f64,
    pub border_color: Color,
    pub border_opacity: f64,
    pub fill_color: Option<Color>,
    pub fill_opacity: f64,
}

impl TextParams {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            border_opacity: DEFAULT_BORDER_OPACITY,
            fill_color: DEFAULT_FILL_COLOR,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }

    pub fn with_font(mut self, font_name: impl Into<String>, font_size: f64) -> Self {
        self.font_name = font_name.into();
        self.font_size = font_size;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Kind of instruction selected by the tag character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    Rectangle,
    Line,
    Text,
}

impl InstructionKind {
    /// Classify by the upper-cased tag character, `None` for unknown tags
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'R' => Some(InstructionKind::Rectangle),
            'L' => Some(InstructionKind::Line),
            'T' => Some(InstructionKind::Text),
            _ => None,
        }
    }

    /// Classify a stripped, non-comment line by its first character
    pub fn classify(line: &str) -> Option<Self> {
        line.chars().next().and_then(Self::from_tag)
    }
}

/// The drawing operation of an instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOperation {
    Rectangle(RectangleParams),
    Line(LineParams),
    Text(TextParams),
}

impl DrawOperation {
    pub fn kind(&self) -> InstructionKind {
        match self {
            DrawOperation::Rectangle(_) => InstructionKind::Rectangle,
            DrawOperation::Line(_) => InstructionKind::Line,
            DrawOperation::Text(_) => InstructionKind::Text,
        }
    }
}

/// One parsed instruction line
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// 1-based page number as written in the instruction file
    pub page: u32,
    pub operation: DrawOperation,
}

impl Instruction {
    pub fn new(page: u32, operation: DrawOperation) -> Self {
        Self { page, operation }
    }

    /// Parse a stripped, non-comment instruction line
    ///
    /// Returns `Ok(None)` when the tag character is not recognised.
    pub fn parse(line: &str) -> Result<Option<Self>, FieldError> {
        match InstructionKind::classify(line) {
            Some(kind) => Self::from_fields(kind, &Fields::split(line)).map(Some),
            None => Ok(None),
        }
    }

    /// Map positional fields onto the typed parameters of `kind`
    pub fn from_fields(kind: InstructionKind, fields: &Fields<'_>) -> Result<Self, FieldError> {
        let page = page_number(fields)?;

        let operation = match kind {
            InstructionKind::Rectangle => DrawOperation::Rectangle(RectangleParams {
                x0: fields.require(2, "x0")?,
                y0: fields.require(3, "y0")?,
                x1: fields.require(4, "x1")?,
                y1: fields.require(5, "y1")?,
                border_width: fields.get_or(6, "border_width", DEFAULT_BORDER_WIDTH)?,
                border_color: fields.get_or(7, "border_color", DEFAULT_BORDER_COLOR)?,
                border_opacity: fields.get_or(8, "border_opacity", DEFAULT_BORDER_OPACITY)?,
                fill_color: fields.get(9, "fill_color")?.or(DEFAULT_FILL_COLOR),
                fill_opacity: fields.get_or(10, "fill_opacity", DEFAULT_FILL_OPACITY)?,
            }),
            InstructionKind::Line => DrawOperation::Line(LineParams {
                x0: fields.require(2, "x0")?,
                y0: fields.require(3, "y0")?,
                x1: fields.require(4, "x1")?,
                y1: fields.require(5, "y1")?,
                width: fields.get_or(6, "width", DEFAULT_BORDER_WIDTH)?,
                color: fields.get_or(7, "color", DEFAULT_BORDER_COLOR)?,
                opacity: fields.get_or(8, "opacity", DEFAULT_BORDER_OPACITY)?,
            }),
            InstructionKind::Text => DrawOperation::Text(TextParams {
                x: fields.require(2, "x")?,
                y: fields.require(3, "y")?,
                text: fields.require(4, "text")?,
                font_name: fields.get_or(5, "font_name", DEFAULT_FONT_NAME.to_string())?,
                font_size: fields.get_or(6, "font_size", DEFAULT_FONT_SIZE)?,
                border_width: fields.get_or(7, "border_width", DEFAULT_BORDER_WIDTH)?,
                border_color: fields.get_or(8, "border_color", DEFAULT_BORDER_COLOR)?,
                border_opacity: fields.get_or(9, "border_opacity", DEFAULT_BORDER_OPACITY)?,
                fill_color: fields.get(10, "fill_color")?.or(DEFAULT_FILL_COLOR),
                fill_opacity: fields.get_or(11, "fill_opacity", DEFAULT_FILL_OPACITY)?,
            }),
        };

        Ok(Self { page, operation })
    }
}

fn page_number(fields: &Fields<'_>) -> Result<u32, FieldError> {
    let value: i64 = fields.require(1, "page")?;
    u32::try_from(value)
        .ok()
        .filter(|page| *page >= 1)
        .ok_or(FieldError::OutOfRange {
            index: 1,
            name: "page",
            value,
        })
}
