//! Canonical card serialization.
//!
//! Serialization is the inverse of parsing: for every card `c`,
//! `parse_card(serialize(c))` equals `c` in property set, order, and values.
//! Output is canonical (uppercase names, re-escaped values, CRLF endings,
//! 75-octet folding) rather than a byte-for-byte copy of whatever the
//! input file looked like.

mod fold;

pub use fold::fold_line;

use crate::core::{Card, Parameter, Property, Value};

/// Serializes a card to its file form.
#[must_use]
pub fn serialize(card: &Card) -> String {
    let mut out = String::new();

    for prop in card.properties() {
        out.push_str(&fold_line(&property_line(prop)));
        out.push_str("\r\n");
    }

    out
}

/// Renders one property as an unfolded logical line.
fn property_line(prop: &Property) -> String {
    let mut line = String::new();

    if let Some(group) = &prop.group {
        line.push_str(group);
        line.push('.');
    }
    line.push_str(&prop.name);

    for param in &prop.params {
        line.push(';');
        line.push_str(&parameter_text(param));
    }

    line.push(':');
    line.push_str(&value_text(&prop.value));

    line
}

fn parameter_text(param: &Parameter) -> String {
    let values = param
        .values
        .iter()
        .map(|v| quote_param_value(v))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}={values}", param.name)
}

/// Quotes a parameter value when it contains characters that would otherwise
/// terminate the parameter.
fn quote_param_value(value: &str) -> String {
    if value.contains([';', ':', ',']) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Text(text) => escape_text(text),
        Value::Structured(parts) => parts
            .iter()
            .map(|p| escape_text(p))
            .collect::<Vec<_>>()
            .join(";"),
    }
}

/// Escapes a text value for output.
///
/// The inverse of [`crate::parse::unescape_text`]: backslash, semicolon,
/// comma, and newline become `\\`, `\;`, `\,`, and `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str(r"\\"),
            ';' => result.push_str(r"\;"),
            ',' => result.push_str(r"\,"),
            '\n' => result.push_str(r"\n"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::names;

    #[test]
    fn serialize_minimal_card() {
        let card = Card::new("Jane Doe");
        assert_eq!(
            serialize(&card),
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_escapes_text() {
        let mut card = Card::new("placeholder");
        card.set_formatted_name("Doe, John; Jr.");
        assert!(serialize(&card).contains(r"FN:Doe\, John\; Jr."));
    }

    #[test]
    fn serialize_structured_value() {
        let prop = Property::structured(names::N, vec![
            "Doe".into(),
            "John".into(),
            String::new(),
            String::new(),
            String::new(),
        ]);
        assert_eq!(property_line(&prop), "N:Doe;John;;;");
    }

    #[test]
    fn serialize_group_and_params() {
        let mut prop = Property::text("TEL", "+1-555-555-5555");
        prop.group = Some("item1".to_string());
        prop.add_param(Parameter::multi("TYPE", vec!["home".into(), "voice".into()]));
        assert_eq!(
            property_line(&prop),
            "item1.TEL;TYPE=home,voice:+1-555-555-5555"
        );
    }

    #[test]
    fn serialize_quotes_param_value_with_colon() {
        let mut prop = Property::text("ADR", "Main St");
        prop.add_param(Parameter::new("LABEL", "Main St: Suite 5"));
        assert_eq!(
            property_line(&prop),
            "ADR;LABEL=\"Main St: Suite 5\":Main St"
        );
    }

    #[test]
    fn serialize_folds_long_lines() {
        let mut card = Card::new("placeholder");
        card.set_formatted_name("X".repeat(100));
        let out = serialize(&card);

        for line in out.split("\r\n") {
            assert!(line.len() <= 75);
        }
    }
}
