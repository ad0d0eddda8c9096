use std::path::PathBuf;

use thiserror::Error;

use meishi_core::error::ErrorCode;
use meishi_vcf::{DateError, ParseError, ValidationError};

/// Store-level errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid card file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("card file already exists: {}", .0.display())]
    DuplicatePath(PathBuf),

    #[error("card file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// The stable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidFileName(_) => ErrorCode::InvalidFileName,
            Self::DuplicatePath(_) => ErrorCode::DuplicatePath,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Parse(err) => err.code(),
            Self::Validation(err) => err.code(),
            Self::Date(err) => err.code(),
            Self::Io(_) => ErrorCode::Io,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_pass_through_from_inner_errors() {
        let parse = StoreError::from(ParseError::property_format(3, "missing colon"));
        assert_eq!(parse.code(), ErrorCode::PropertyFormat);

        let dup = StoreError::DuplicatePath(PathBuf::from("a.vcf"));
        assert_eq!(dup.code(), ErrorCode::DuplicatePath);
        assert_eq!(dup.code().as_str(), "duplicate-path");
    }
}
