//! Tab-separated drawing instruction files
//!
//! Each non-blank, non-comment line starts with a tag character (`R`, `L`
//! or `T`) followed by tab-separated positional fields. Lines starting with
//! `%` or `#` are comments.

mod fields;
mod instruction;
mod reader;

pub use fields::{FieldError, FieldValue, Fields, FIELD_SEPARATOR};
pub use instruction::{
    DrawOperation, Instruction, InstructionKind, LineParams, RectangleParams, TextParams,
    DEFAULT_BORDER_COLOR, DEFAULT_BORDER_OPACITY, DEFAULT_BORDER_WIDTH, DEFAULT_FILL_COLOR,
    DEFAULT_FILL_OPACITY, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE,
};
pub use reader::{
    read_instructions, LineKind, ProcessSummary, Reporter, TracingReporter, COMMENT_MARKERS,
};
