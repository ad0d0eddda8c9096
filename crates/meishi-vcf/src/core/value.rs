//! Property value shapes.

/// A property value.
///
/// Values are stored unescaped; the serializer re-applies backslash escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain text value.
    Text(String),

    /// Structured value: ordered sub-values, semicolon-separated in source
    /// (e.g. the five components of `N`).
    Structured(Vec<String>),
}

impl Value {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Structured(_) => None,
        }
    }

    /// Returns the sub-values if this is a structured value.
    #[must_use]
    pub fn as_structured(&self) -> Option<&[String]> {
        match self {
            Self::Structured(parts) => Some(parts),
            Self::Text(_) => None,
        }
    }

}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
