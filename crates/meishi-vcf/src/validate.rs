//! Semantic card validation.
//!
//! The parser already refuses structurally broken files, but a [`Card`] can
//! also be assembled in memory from raw properties, so validation re-checks
//! the envelope before anything else. Checks run in a fixed precedence
//! order and stop at the first failure; the same card always yields the
//! same result.

use thiserror::Error;

use meishi_core::error::ErrorCode;

use crate::core::{Card, Property, Value, names};
use crate::date::decode_date;
use crate::parse::structured_field_limit;

/// A semantic rule violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("first property must be BEGIN:VCARD")]
    MissingBegin,

    #[error("last property must be END:VCARD")]
    MissingEnd,

    #[error("{0} must not appear inside the card body")]
    EnvelopeInBody(String),

    #[error("card must have exactly one VERSION property, found {0}")]
    VersionCount(usize),

    #[error("VERSION value must not be empty")]
    EmptyVersion,

    #[error("card must have exactly one FN property, found {0}")]
    FnCount(usize),

    #[error("FN value must not be empty")]
    EmptyFn,

    #[error("{property} value does not decode as a date: {message}")]
    BadDate { property: String, message: String },

    #[error("{property} has {actual} sub-fields, at most {expected} allowed")]
    ExcessSubFields {
        property: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0} must appear at most once")]
    DuplicateProperty(String),

    #[error("{property} has a parameter with an empty name or value")]
    EmptyParameter { property: String },
}

impl ValidationError {
    /// The stable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

/// Validates a built card against the semantic rules.
///
/// Precedence order, stopping at the first failure:
/// 1. envelope integrity (BEGIN / one VERSION / END);
/// 2. exactly one FN with a non-empty value;
/// 3. BDAY and ANNIVERSARY values decode under the date codec;
/// 4. structured properties stay within their sub-field limits;
/// 5. at-most-once cardinality and well-formed parameters.
///
/// ## Errors
/// Returns the first [`ValidationError`] encountered, if any.
pub fn validate(card: &Card) -> Result<(), ValidationError> {
    check_envelope(card)?;
    check_formatted_name(card)?;
    check_dates(card)?;
    check_structured(card)?;
    check_cardinality(card)?;
    Ok(())
}

fn check_envelope(card: &Card) -> Result<(), ValidationError> {
    let props = card.properties();

    if !props.first().is_some_and(|p| is_envelope(p, names::BEGIN)) {
        return Err(ValidationError::MissingBegin);
    }
    if props.len() < 2 || !props.last().is_some_and(|p| is_envelope(p, names::END)) {
        return Err(ValidationError::MissingEnd);
    }

    let interior = &props[1..props.len() - 1];
    if let Some(p) = interior
        .iter()
        .find(|p| p.name == names::BEGIN || p.name == names::END)
    {
        return Err(ValidationError::EnvelopeInBody(p.name.clone()));
    }

    let versions = card.properties_named(names::VERSION).count();
    if versions != 1 {
        return Err(ValidationError::VersionCount(versions));
    }
    if card.version().is_none_or(str::is_empty) {
        return Err(ValidationError::EmptyVersion);
    }

    Ok(())
}

fn is_envelope(prop: &Property, name: &str) -> bool {
    prop.name == name
        && prop
            .as_text()
            .is_some_and(|v| v.eq_ignore_ascii_case(names::VCARD))
}

fn check_formatted_name(card: &Card) -> Result<(), ValidationError> {
    let count = card.properties_named(names::FN).count();
    if count != 1 {
        return Err(ValidationError::FnCount(count));
    }
    if card.formatted_name().is_none_or(str::is_empty) {
        return Err(ValidationError::EmptyFn);
    }
    Ok(())
}

fn check_dates(card: &Card) -> Result<(), ValidationError> {
    for name in [names::BDAY, names::ANNIVERSARY] {
        for prop in card.properties_named(name) {
            let Some(raw) = prop.as_text() else {
                return Err(ValidationError::BadDate {
                    property: name.to_string(),
                    message: "structured value where a date was expected".to_string(),
                });
            };
            if let Err(err) = decode_date(raw) {
                return Err(ValidationError::BadDate {
                    property: name.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn check_structured(card: &Card) -> Result<(), ValidationError> {
    for prop in card.properties() {
        let Some(limit) = structured_field_limit(&prop.name) else {
            continue;
        };
        // Missing trailing sub-fields are implicitly empty; only excess is
        // an error.
        if let Value::Structured(parts) = &prop.value
            && parts.len() > limit
        {
            return Err(ValidationError::ExcessSubFields {
                property: prop.name.clone(),
                expected: limit,
                actual: parts.len(),
            });
        }
    }
    Ok(())
}

fn check_cardinality(card: &Card) -> Result<(), ValidationError> {
    for name in names::AT_MOST_ONCE {
        if card.properties_named(name).count() > 1 {
            return Err(ValidationError::DuplicateProperty(name.to_string()));
        }
    }

    for prop in card.properties() {
        if prop
            .params
            .iter()
            .any(|p| p.name.is_empty() || p.values.iter().all(String::is_empty))
        {
            return Err(ValidationError::EmptyParameter {
                property: prop.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parameter;
    use crate::parse::parse_card;

    fn card(body: &str) -> Card {
        let input = format!("BEGIN:VCARD\r\nVERSION:4.0\r\n{body}END:VCARD\r\n");
        parse_card(&input).expect("test card should parse")
    }

    #[test]
    fn minimal_card_is_valid() {
        assert_eq!(validate(&card("FN:John Doe\r\n")), Ok(()));
    }

    #[test]
    fn missing_fn_names_fn() {
        // Bypasses the parser: builder would reject this file.
        let card = Card::from_properties(vec![
            Property::text(names::BEGIN, names::VCARD),
            Property::text(names::VERSION, "4.0"),
            Property::text(names::END, names::VCARD),
        ]);
        assert_eq!(validate(&card), Err(ValidationError::FnCount(0)));
    }

    #[test]
    fn empty_fn_is_rejected() {
        assert_eq!(
            validate(&card("FN:\r\n")),
            Err(ValidationError::EmptyFn)
        );
    }

    #[test]
    fn missing_envelope_is_first_failure() {
        // No envelope and no FN: envelope wins by precedence.
        let card = Card::from_properties(vec![Property::text(names::VERSION, "4.0")]);
        assert_eq!(validate(&card), Err(ValidationError::MissingBegin));
    }

    #[test]
    fn bad_birthday_is_rejected() {
        let err = validate(&card("FN:X\r\nBDAY:19901301\r\n")).unwrap_err();
        assert!(matches!(err, ValidationError::BadDate { ref property, .. } if property == "BDAY"));
        assert_eq!(err.code(), ErrorCode::Validation);
    }

    #[test]
    fn text_birthday_is_accepted() {
        assert_eq!(validate(&card("FN:X\r\nBDAY:circa 1800\r\n")), Ok(()));
    }

    #[test]
    fn valid_anniversary_is_accepted() {
        assert_eq!(
            validate(&card("FN:X\r\nANNIVERSARY:20100410T120000Z\r\n")),
            Ok(())
        );
    }

    #[test]
    fn short_n_is_padded_not_rejected() {
        assert_eq!(validate(&card("FN:X\r\nN:Doe;John\r\n")), Ok(()));
    }

    #[test]
    fn excess_n_fields_are_rejected() {
        let err = validate(&card("FN:X\r\nN:a;b;c;d;e;f\r\n")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExcessSubFields {
                property: "N".to_string(),
                expected: 5,
                actual: 6,
            }
        );
    }

    #[test]
    fn excess_adr_fields_are_rejected() {
        let err = validate(&card("FN:X\r\nADR:a;b;c;d;e;f;g;h\r\n")).unwrap_err();
        assert!(matches!(err, ValidationError::ExcessSubFields { .. }));
    }

    #[test]
    fn duplicate_uid_is_rejected() {
        let err = validate(&card("FN:X\r\nUID:a\r\nUID:b\r\n")).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateProperty("UID".to_string()));
    }

    #[test]
    fn empty_parameter_on_hand_built_card_is_rejected() {
        let mut prop = Property::text("TEL", "+1-555");
        prop.add_param(Parameter::multi("TYPE", vec![String::new()]));
        let card = Card::from_properties(vec![
            Property::text(names::BEGIN, names::VCARD),
            Property::text(names::VERSION, "4.0"),
            Property::text(names::FN, "X"),
            prop,
            Property::text(names::END, names::VCARD),
        ]);
        assert!(matches!(
            validate(&card),
            Err(ValidationError::EmptyParameter { .. })
        ));
    }

    #[test]
    fn validation_is_deterministic() {
        let c = card("FN:X\r\nBDAY:19900615\r\n");
        assert_eq!(validate(&c), validate(&c));
    }
}
