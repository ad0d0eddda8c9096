/// Stable error codes for every failure the workspace can surface.
///
/// Callers branch on the code (or its string form) rather than matching on
/// error message text. The set is append-only: codes are part of the public
/// contract and existing values never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input could not be split into logical lines.
    MalformedInput,
    /// A logical line is not a well-formed property.
    PropertyFormat,
    /// The BEGIN/VERSION/END envelope or FN cardinality is broken.
    Structural,
    /// A built card violates a semantic rule.
    Validation,
    /// A display-form date could not be encoded to wire form.
    Encode,
    /// A wire-form date could not be decoded to display form.
    Decode,
    /// A card path does not carry an accepted extension.
    InvalidFileName,
    /// A card file already exists at the target path.
    DuplicatePath,
    /// A card file does not exist.
    NotFound,
    /// An underlying I/O operation failed.
    Io,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed-input",
            Self::PropertyFormat => "property-format",
            Self::Structural => "structural",
            Self::Validation => "validation",
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::InvalidFileName => "invalid-file-name",
            Self::DuplicatePath => "duplicate-path",
            Self::NotFound => "not-found",
            Self::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
