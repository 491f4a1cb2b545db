//! Greedy whitespace line wrapping.
//!
//! A line is cut at the furthest breakpoint (space, `\n` or `\r`) that keeps the
//! slice before it strictly narrower than the limit. When the rest of the text
//! fits, or no breakpoint is available, the rest is emitted as the last line.

use super::constants::{BREAKPOINTS, DEFAULT_MAX_LINE_LENGTH, MIN_BREAK_OFFSET};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("Invalid argument: max line length must be positive, got {0}")]
    InvalidArgument(usize),
}

/// How the width of a line is counted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// One unit per Unicode scalar value.
    #[default]
    Chars,
    /// Terminal display columns.
    Columns,
}

impl Measure {
    pub fn char_width(self, ch: char) -> usize {
        match self {
            Measure::Chars => 1,
            Measure::Columns => ch.width().unwrap_or(0),
        }
    }

    pub fn str_width(self, s: &str) -> usize {
        s.chars().map(|ch| self.char_width(ch)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    max_line_length: usize,
    measure: Measure,
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            measure: Measure::default(),
        }
    }
}

impl LineWrapper {
    pub fn new(max_line_length: usize) -> Result<Self, WrapError> {
        if max_line_length == 0 {
            return Err(WrapError::InvalidArgument(max_line_length));
        }
        Ok(Self {
            max_line_length,
            measure: Measure::default(),
        })
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Lazily splits `text` into trimmed lines borrowed from it.
    pub fn lines<'a>(&self, text: &'a str) -> WrappedLines<'a> {
        WrappedLines {
            rest: text,
            wrapper: *self,
        }
    }

    pub fn wrap(&self, text: &str) -> Vec<String> {
        self.lines(text).map(str::to_string).collect()
    }

    /// Byte length of the next line at the start of `rest`.
    ///
    /// `None` means the whole of `rest` is the next (and last) line, either
    /// because it fits or because there is nowhere to break it.
    fn next_break(&self, rest: &str) -> Option<usize> {
        let mut width = 0;
        let mut candidate = None;

        for (index, (offset, ch)) in rest.char_indices().enumerate() {
            // `width` is the width of rest[..offset] here
            if index >= MIN_BREAK_OFFSET
                && width < self.max_line_length
                && BREAKPOINTS.contains(&ch)
            {
                candidate = Some(offset);
            }

            width += self.measure.char_width(ch);
            if width > self.max_line_length {
                if candidate.is_none() {
                    log::trace!(
                        "no breakpoint within {} {:?}, keeping remainder unbroken",
                        self.max_line_length,
                        self.measure
                    );
                }
                return candidate;
            }
        }

        None
    }
}

/// Iterator returned by [`LineWrapper::lines`].
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    rest: &'a str,
    wrapper: LineWrapper,
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let line = match self.wrapper.next_break(self.rest) {
            Some(len) => {
                let (line, rest) = self.rest.split_at(len);
                self.rest = rest;
                line
            }
            None => std::mem::take(&mut self.rest),
        };

        Some(line.trim())
    }
}

impl FusedIterator for WrappedLines<'_> {}

/// Wraps `text` into lines no wider than `max_line_length` characters.
pub fn wrap(text: &str, max_line_length: usize) -> Result<Vec<String>, WrapError> {
    Ok(LineWrapper::new(max_line_length)?.wrap(text))
}

/// Wraps `text` at the default width of 80 characters.
pub fn wrap_default(text: &str) -> Vec<String> {
    LineWrapper::default().wrap(text)
}
