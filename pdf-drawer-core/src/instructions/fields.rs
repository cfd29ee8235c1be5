//! Positional field parsing
//!
//! An instruction line is split on tab characters into string fields.
//! Each field is addressed by a fixed index and converted into a typed value.
//! A field that is absent (index out of range) or empty yields the caller's
//! default; required fields have no default and fail instead.

use crate::graphics::{Color, ColorParseError};
use thiserror::Error;

/// Field separator of instruction lines
pub const FIELD_SEPARATOR: char = '\t';

/// A positional field that could not be turned into a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("missing required field {index} ({name})")]
    Missing { index: usize, name: &'static str },

    #[error("field {index} ({name}): '{value}' is not an integer")]
    InvalidInteger {
        index: usize,
        name: &'static str,
        value: String,
    },

    #[error("field {index} ({name}): '{value}' is not a finite number")]
    InvalidFloat {
        index: usize,
        name: &'static str,
        value: String,
    },

    #[error("field {index} ({name}): '{value}' is not a valid color, {reason}")]
    InvalidColor {
        index: usize,
        name: &'static str,
        value: String,
        reason: ColorParseError,
    },

    #[error("field {index} ({name}): {value} is out of range")]
    OutOfRange {
        index: usize,
        name: &'static str,
        value: i64,
    },
}

/// Types a field can be parsed into
pub trait FieldValue: Sized {
    fn parse_field(raw: &str, index: usize, name: &'static str) -> Result<Self, FieldError>;
}

impl FieldValue for i64 {
    fn parse_field(raw: &str, index: usize, name: &'static str) -> Result<Self, FieldError> {
        raw.trim()
            .parse()
            .map_err(|_| FieldError::InvalidInteger {
                index,
                name,
                value: raw.to_string(),
            })
    }
}

impl FieldValue for f64 {
    fn parse_field(raw: &str, index: usize, name: &'static str) -> Result<Self, FieldError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FieldError::InvalidFloat {
                index,
                name,
                value: raw.to_string(),
            })
    }
}

/// Strings are taken verbatim and never fail
impl FieldValue for String {
    fn parse_field(raw: &str, _index: usize, _name: &'static str) -> Result<Self, FieldError> {
        Ok(raw.to_string())
    }
}

impl FieldValue for Color {
    fn parse_field(raw: &str, index: usize, name: &'static str) -> Result<Self, FieldError> {
        raw.parse().map_err(|reason| FieldError::InvalidColor {
            index,
            name,
            value: raw.to_string(),
            reason,
        })
    }
}

/// The tab-separated fields of one instruction line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    values: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split a line on the tab separator
    pub fn split(line: &'a str) -> Self {
        Self {
            values: line.split(FIELD_SEPARATOR).collect(),
        }
    }

    pub fn from_values(values: Vec<&'a str>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw text of a field, `None` when absent or empty
    pub fn raw(&self, index: usize) -> Option<&'a str> {
        self.values
            .get(index)
            .copied()
            .filter(|value| !value.is_empty())
    }

    /// Parse a field, `None` when absent or empty
    pub fn get<T: FieldValue>(&self, index: usize, name: &'static str) -> Result<Option<T>, FieldError> {
        self.raw(index)
            .map(|raw| T::parse_field(raw, index, name))
            .transpose()
    }

    /// Parse a field, falling back to `default` when absent or empty
    pub fn get_or<T: FieldValue>(
        &self,
        index: usize,
        name: &'static str,
        default: T,
    ) -> Result<T, FieldError> {
        Ok(self.get(index, name)?.unwrap_or(default))
    }

    /// Parse a field that has no default
    pub fn require<T: FieldValue>(&self, index: usize, name: &'static str) -> Result<T, FieldError> {
        self.get(index, name)?
            .ok_or(FieldError::Missing { index, name })
    }
}
