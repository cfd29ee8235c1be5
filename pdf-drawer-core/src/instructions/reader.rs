//! Line-by-line reading of instruction files

use super::instruction::Instruction;
use crate::error::{DrawError, Result};
use std::io::{self, BufRead, ErrorKind};

/// Characters that start a comment line
pub const COMMENT_MARKERS: [char; 2] = ['%', '#'];

/// Receives warnings about lines that could not be classified
pub trait Reporter {
    /// `line` is the 1-based line number, `text` the stripped line
    fn unknown_instruction(&mut self, line: usize, text: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn unknown_instruction(&mut self, line: usize, text: &str) {
        self(line, text)
    }
}

/// Reports unknown instructions as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn unknown_instruction(&mut self, line: usize, text: &str) {
        tracing::warn!(line, instruction = text, "Unknown drawing instruction");
    }
}

/// Counters collected while processing an instruction file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Lines read, including blank and comment lines
    pub lines: usize,
    /// Instructions applied to the canvas
    pub applied: usize,
    /// Blank and comment lines
    pub skipped: usize,
    /// Lines with an unrecognised tag
    pub unknown: usize,
}

/// What a single stripped line contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Content(&'a str),
}

impl<'a> LineKind<'a> {
    /// Strip surrounding whitespace and classify the remainder
    pub fn of(line: &'a str) -> Self {
        let stripped = line.trim();
        if stripped.is_empty() {
            LineKind::Blank
        } else if stripped.starts_with(COMMENT_MARKERS) {
            LineKind::Comment
        } else {
            LineKind::Content(stripped)
        }
    }
}

/// Lines of a reader split on `\n`, `\r\n` or a lone `\r`
struct UniversalLines<R> {
    reader: R,
}

impl<R: BufRead> UniversalLines<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut terminated = false;

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = buf[end];
                    bytes.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    if terminator == b'\r' {
                        self.skip_line_feed()?;
                    }
                    terminated = true;
                    break;
                }
                None => {
                    let len = buf.len();
                    bytes.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }

        if bytes.is_empty() && !terminated {
            return Ok(None);
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }

    fn skip_line_feed(&mut self) -> io::Result<()> {
        if self.reader.fill_buf()?.first() == Some(&b'\n') {
            self.reader.consume(1);
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

/// Parse every instruction from `reader` and hand it to `apply`
///
/// Lines may end in `\n`, `\r\n` or `\r`. Unknown tags go to `reporter`
/// and processing continues. The first parse
/// or apply failure stops processing and is returned tagged with its line
/// number.
pub fn read_instructions<R, F>(
    reader: R,
    reporter: &mut dyn Reporter,
    mut apply: F,
) -> Result<ProcessSummary>
where
    R: BufRead,
    F: FnMut(&Instruction) -> Result<()>,
{
    let mut summary = ProcessSummary::default();

    for (index, line) in UniversalLines::new(reader).enumerate() {
        let line = line?;
        let number = index + 1;
        summary.lines += 1;

        let content = match LineKind::of(&line) {
            LineKind::Blank | LineKind::Comment => {
                summary.skipped += 1;
                continue;
            }
            LineKind::Content(content) => content,
        };

        match Instruction::parse(content) {
            Ok(Some(instruction)) => {
                apply(&instruction).map_err(|e| e.at_line(number))?;
                summary.applied += 1;
            }
            Ok(None) => {
                reporter.unknown_instruction(number, content);
                summary.unknown += 1;
            }
            Err(e) => return Err(DrawError::from(e).at_line(number)),
        }
    }

    Ok(summary)
}
