//! Value-level parsing helpers: unescaping and structured splitting.

/// Unescapes a text value.
///
/// Escapes: `\n`, `\N` (newline), `\,` (comma), `\;` (semicolon), `\\`
/// (backslash). An unrecognized escape keeps its backslash.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' {
            prev_backslash = !prev_backslash;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Returns the maximum sub-field count for a structured property name, or
/// `None` when the property is not structured.
///
/// `N` has five components (family;given;additional;prefixes;suffixes),
/// `ADR` seven (po box;extended;street;locality;region;postal code;country),
/// `GENDER` two (sex;identity). `ORG` is structured but unbounded
/// (name;unit;unit;...), signalled by `usize::MAX`.
#[must_use]
pub fn structured_field_limit(name: &str) -> Option<usize> {
    match name {
        "N" => Some(5),
        "ADR" => Some(7),
        "GENDER" => Some(2),
        "ORG" => Some(usize::MAX),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_text_newline() {
        assert_eq!(unescape_text(r"Line1\nLine2"), "Line1\nLine2");
        assert_eq!(unescape_text(r"Line1\NLine2"), "Line1\nLine2");
    }

    #[test]
    fn unescape_text_special() {
        assert_eq!(unescape_text(r"a\,b\;c\\d"), "a,b;c\\d");
    }

    #[test]
    fn unescape_keeps_unknown_escape() {
        assert_eq!(unescape_text(r"a\xb"), r"a\xb");
    }

    #[test]
    fn split_structured_basic() {
        let parts = split_structured("Doe;John;Q;Mr.;Jr.");
        assert_eq!(parts, vec!["Doe", "John", "Q", "Mr.", "Jr."]);
    }

    #[test]
    fn split_structured_escaped() {
        let parts = split_structured(r"Doe\;Smith;John");
        assert_eq!(parts, vec![r"Doe\;Smith", "John"]);
    }

    #[test]
    fn split_structured_escaped_backslash_before_semicolon() {
        // `\\;` is an escaped backslash followed by a real separator.
        let parts = split_structured(r"Doe\\;John");
        assert_eq!(parts, vec![r"Doe\\", "John"]);
    }

    #[test]
    fn split_structured_keeps_empty_fields() {
        let parts = split_structured(";;123 Main St;;");
        assert_eq!(parts, vec!["", "", "123 Main St", "", ""]);
    }

    #[test]
    fn field_limits() {
        assert_eq!(structured_field_limit("N"), Some(5));
        assert_eq!(structured_field_limit("ADR"), Some(7));
        assert_eq!(structured_field_limit("FN"), None);
        assert_eq!(structured_field_limit("X-FOO"), None);
    }
}
