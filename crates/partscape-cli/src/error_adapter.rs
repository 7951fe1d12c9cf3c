//! Error adapter for converting PartscapeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Input errors point
//! at the line and column of the build file where deserialization failed.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use partscape::PartscapeError;

/// Adapter for a build input error with its source text.
pub struct InputAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> InputAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the failing position in the source.
    fn span(&self) -> SourceSpan {
        let offset = line_column_offset(self.src, self.err.line(), self.err.column());
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for InputAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for InputAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid build input")
    }
}

impl std::error::Error for InputAdapter<'_> {}

impl MietteDiagnostic for InputAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err.classify() {
            Category::Syntax => "partscape::input::syntax",
            Category::Eof => "partscape::input::eof",
            Category::Data => "partscape::input::schema",
            Category::Io => "partscape::input::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err.classify() {
            Category::Data => Some(Box::new(
                "a build is an object with `parts` and `wiring` arrays; every part needs a `name`",
            )),
            Category::Eof => Some(Box::new("the file ended before the JSON was complete")),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(self.err.to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`PartscapeError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a PartscapeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PartscapeError::Io(_) => "partscape::io",
            PartscapeError::Input { .. } => "partscape::input",
            PartscapeError::Config(_) => "partscape::config",
            PartscapeError::Export(_) => "partscape::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An input error with a source location.
    Input(InputAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Input(i) => fmt::Display::fmt(i, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Input(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(i) => i.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(i) => i.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Input(i) => i.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Input(i) => i.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line and column into a byte offset, clamped to the source.
fn line_column_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`PartscapeError`] into a reportable error.
pub fn to_reportable(err: &PartscapeError) -> Reportable<'_> {
    match err {
        PartscapeError::Input { err, src } => Reportable::Input(InputAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
