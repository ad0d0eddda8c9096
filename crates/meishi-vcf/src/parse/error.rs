//! Parse error types.

use std::fmt;

use meishi_core::error::ErrorCode;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a tokenization error.
    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedInput, line, message)
    }

    /// Creates a line-level property format error.
    #[must_use]
    pub fn property_format(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::PropertyFormat, line, message)
    }

    /// Creates an envelope/cardinality error.
    #[must_use]
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Structural, line, message)
    }

    /// The stable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input could not be split into logical lines.
    MalformedInput,
    /// A logical line is not a well-formed property.
    PropertyFormat,
    /// The envelope is broken or a cardinality rule is violated.
    Structural,
}

impl ParseErrorKind {
    /// The stable code for this kind.
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::MalformedInput => ErrorCode::MalformedInput,
            Self::PropertyFormat => ErrorCode::PropertyFormat,
            Self::Structural => ErrorCode::Structural,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed input"),
            Self::PropertyFormat => write!(f, "invalid property"),
            Self::Structural => write!(f, "structural error"),
        }
    }
}
