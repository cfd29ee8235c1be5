use crate::instructions::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Field(#[from] FieldError),

    /// Failure while processing a line of an instruction file (1-based line number)
    #[error("Line {line}: {source}")]
    Instruction {
        line: usize,
        #[source]
        source: Box<DrawError>,
    },

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(u32),

    #[error("Page index {0} out of bounds (document has {1} pages)")]
    PageIndexOutOfBounds(usize, usize),

    #[error("Invalid page selection: {0}")]
    InvalidPageSelection(String),

    #[error("Font error: {0}")]
    FontError(String),

    /// A coordinate or size too large to be written as a PDF real number
    #[error("Number out of range: {0}")]
    NumberOutOfRange(f64),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl DrawError {
    /// Attach the instruction file line number to an error
    pub fn at_line(self, line: usize) -> Self {
        DrawError::Instruction {
            line,
            source: Box::new(self),
        }
    }

    /// True for failures caused by malformed instruction input
    pub fn is_parse_error(&self) -> bool {
        match self {
            DrawError::Field(_) => true,
            DrawError::Instruction { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }

    /// Line of the instruction file the error was raised on, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            DrawError::Instruction { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_draw_error_display() {
        let error = DrawError::InvalidStructure("missing page tree".to_string());
        assert_eq!(error.to_string(), "Invalid PDF structure: missing page tree");

        let error = DrawError::PageIndexOutOfBounds(4, 2);
        assert_eq!(
            error.to_string(),
            "Page index 4 out of bounds (document has 2 pages)"
        );
    }

    #[test]
    fn test_draw_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error = DrawError::from(io_error);

        match error {
            DrawError::Io(ref err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
        assert!(!error.is_parse_error());
    }

    #[test]
    fn test_field_error_is_parse_error() {
        let error = DrawError::from(FieldError::InvalidFloat {
            index: 2,
            name: "x0",
            value: "abc".to_string(),
        });
        assert!(error.is_parse_error());
        assert_eq!(error.line(), None);
        assert!(error.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_at_line_wraps_and_keeps_classification() {
        let error = DrawError::from(FieldError::Missing {
            index: 1,
            name: "page",
        })
        .at_line(7);

        assert_eq!(error.line(), Some(7));
        assert!(error.is_parse_error());
        assert!(error.to_string().starts_with("Line 7: Parse error:"));

        let error = DrawError::InvalidPageNumber(9).at_line(3);
        assert_eq!(error.line(), Some(3));
        assert!(!error.is_parse_error());
        assert_eq!(error.to_string(), "Line 3: Invalid page number: 9");
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DrawError>();
    }
}
