//! Lays out a plain-text document: an optional underlined title followed by
//! wrapped, optionally indented paragraphs.

use crate::config::{AppConfig, ConfigError};
use crate::text::constants::DEFAULT_UNDERLINE;
use crate::text::{repeated, LineWrapper};
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

// A line ending followed by at least one line holding nothing but spaces or tabs.
static PARAGRAPH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid paragraph regex"));

// Any run of blanks and line endings inside a paragraph.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n]+").expect("valid blank run regex"));

/// Splits `text` on blank lines, dropping paragraphs that are only whitespace.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_SEPARATOR
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}

/// Joins the lines of a paragraph and collapses blank runs to single spaces
/// so it can be reflowed.
pub fn unfold(paragraph: &str) -> String {
    BLANK_RUN.replace_all(paragraph.trim(), " ").into_owned()
}

#[derive(Debug, Clone)]
pub struct Layout {
    body: LineWrapper,
    heading: LineWrapper,
    indent: usize,
    title: Option<String>,
    underline: char,
}

impl Layout {
    pub fn new(wrapper: LineWrapper) -> Self {
        Self {
            body: wrapper,
            heading: wrapper,
            indent: 0,
            title: None,
            underline: DEFAULT_UNDERLINE,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            body: config.body_wrapper()?,
            heading: config.title_wrapper()?,
            indent: config.indent,
            title: config.title.clone(),
            underline: config.underline,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>, underline: char) -> Self {
        self.title = Some(title.into());
        self.underline = underline;
        self
    }

    /// Indents the body by `indent` spaces, narrowing its wrap width to match.
    pub fn with_indent(mut self, indent: usize) -> Result<Self, ConfigError> {
        let width = self.heading.max_line_length().saturating_sub(indent);
        self.body = LineWrapper::new(width)
            .map(|wrapper| wrapper.with_measure(self.heading.measure()))
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        self.indent = indent;
        Ok(self)
    }

    pub fn render<W: Write>(&self, text: &str, out: &mut W) -> io::Result<()> {
        let paragraphs = split_paragraphs(text);
        log::debug!(
            "rendering {} paragraph(s) at width {} ({:?})",
            paragraphs.len(),
            self.body.max_line_length(),
            self.body.measure()
        );

        if let Some(ref title) = self.title {
            self.render_title(title, out)?;
            if !paragraphs.is_empty() {
                writeln!(out)?;
            }
        }

        for (i, paragraph) in paragraphs.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let unfolded = unfold(paragraph);
            // Blank lines only separate paragraphs
            for line in self.body.lines(&unfolded).filter(|line| !line.is_empty()) {
                writeln!(out, "{}{}", repeated(' ', self.indent), line)?;
            }
        }

        Ok(())
    }

    pub fn render_to_string(&self, text: &str) -> String {
        let mut buffer = Vec::new();
        self.render(text, &mut buffer).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn render_title<W: Write>(&self, title: &str, out: &mut W) -> io::Result<()> {
        let unfolded = unfold(title);
        let mut widest = 0;
        for line in self.heading.lines(&unfolded) {
            widest = widest.max(self.heading.measure().str_width(line));
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", repeated(self.underline, widest))
    }
}
