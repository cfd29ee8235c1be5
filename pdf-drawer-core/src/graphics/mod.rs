mod color;
mod state;

pub use color::{Color, ColorParseError};
pub use state::ExtGState;

use crate::error::{DrawError, Result};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Text rendering mode (`Tr` operator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRenderMode {
    Fill = 0,
    FillStroke = 2,
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Convert to a PDF real, rejecting values that do not fit in one
pub(crate) fn checked_real(value: f64) -> Result<Object> {
    let real = value as f32;
    if real.is_finite() {
        Ok(Object::Real(real))
    } else {
        Err(DrawError::NumberOutOfRange(value))
    }
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

/// Builder for a page content stream fragment
///
/// Operations are kept as typed `lopdf` operations and encoded once with
/// [`GraphicsContext::encode`].
#[derive(Clone, Debug, Default)]
pub struct GraphicsContext {
    operations: Vec<Operation>,
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) -> &mut Self {
        self.operations.push(Operation::new(operator, operands));
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.push("q", vec![])
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push("Q", vec![])
    }

    /// Apply a named ExtGState from the page resources
    pub fn set_graphics_state(&mut self, state_name: &str) -> &mut Self {
        self.push("gs", vec![name(state_name)])
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.push("w", vec![real(width)])
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        let (r, g, b) = color.clamped();
        self.push("RG", vec![real(r), real(g), real(b)])
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        let (r, g, b) = color.clamped();
        self.push("rg", vec![real(r), real(g), real(b)])
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push("m", vec![real(x), real(y)])
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push("l", vec![real(x), real(y)])
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.push("re", vec![real(x), real(y), real(width), real(height)])
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push("S", vec![])
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push("f", vec![])
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.push("B", vec![])
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.push("BT", vec![])
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.push("ET", vec![])
    }

    /// Select a font resource by name and size
    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        self.push("Tf", vec![name(resource_name), real(size)])
    }

    pub fn set_text_render_mode(&mut self, mode: TextRenderMode) -> &mut Self {
        self.push("Tr", vec![Object::Integer(mode as i64)])
    }

    pub fn text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.push("Td", vec![real(x), real(y)])
    }

    /// Show already-encoded text bytes
    pub fn show_text(&mut self, encoded: Vec<u8>) -> &mut Self {
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)])
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Operator names in order, mostly useful for inspection
    pub fn operators(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Encode the operations as content stream bytes
    ///
    /// Fails if any operand overflowed the PDF real range.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let overflow = self
            .operations
            .iter()
            .flat_map(|op| op.operands.iter())
            .find_map(|operand| match operand {
                Object::Real(value) if !value.is_finite() => Some(*value),
                _ => None,
            });
        if let Some(value) = overflow {
            return Err(DrawError::NumberOutOfRange(f64::from(value)));
        }

        let content = Content {
            operations: self.operations.clone(),
        };
        Ok(content.encode()?)
    }
}
