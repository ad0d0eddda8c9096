//! Card builder: assembles parsed lines into a [`Card`].

use super::error::{ParseError, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::values::{split_structured, structured_field_limit, unescape_text};
use crate::core::{Card, Property, Value, names};

/// Parses one card file into a [`Card`].
///
/// The full property sequence is retained in file order, envelope lines
/// included. Pure function of the input; no I/O.
///
/// ## Errors
///
/// - `MalformedInput` if the input cannot be split into logical lines;
/// - `PropertyFormat` if a logical line is not a well-formed property;
/// - `Structural` if the envelope is broken: the first property must be
///   `BEGIN:VCARD`, the last `END:VCARD`, with exactly one `VERSION` and
///   exactly one `FN` in between and no interior envelope lines.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_card(input: &str) -> ParseResult<Card> {
    let lines = split_lines(input)?;

    if lines.is_empty() {
        return Err(ParseError::structural(1, "missing BEGIN:VCARD"));
    }

    tracing::trace!(count = lines.len(), "split logical lines");

    let properties: Vec<(usize, Property)> = lines
        .into_iter()
        .map(|(line_num, line)| {
            parse_content_line(&line, line_num).map(|cl| (line_num, build_property(cl)))
        })
        .collect::<ParseResult<_>>()?;

    check_envelope(&properties)?;

    tracing::debug!(count = properties.len(), "card parsed");

    Ok(Card::from_properties(
        properties.into_iter().map(|(_, p)| p).collect(),
    ))
}

/// Interprets a content line's value per property semantics.
fn build_property(cl: ContentLine) -> Property {
    let value = if structured_field_limit(&cl.name).is_some() {
        Value::Structured(
            split_structured(&cl.value)
                .into_iter()
                .map(unescape_text)
                .collect(),
        )
    } else {
        Value::Text(unescape_text(&cl.value))
    };

    Property {
        group: cl.group,
        name: cl.name,
        params: cl.params,
        value,
    }
}

/// Enforces the envelope rules over the ordered property sequence.
fn check_envelope(properties: &[(usize, Property)]) -> ParseResult<()> {
    let Some((first_line, first)) = properties.first() else {
        return Err(ParseError::structural(1, "missing BEGIN:VCARD"));
    };
    if !is_envelope_line(first, names::BEGIN) {
        return Err(ParseError::structural(*first_line, "missing BEGIN:VCARD"));
    }

    if properties.len() < 2 {
        return Err(ParseError::structural(*first_line, "missing END:VCARD"));
    }
    let (last_line, last) = &properties[properties.len() - 1];
    if !is_envelope_line(last, names::END) {
        return Err(ParseError::structural(*last_line, "missing END:VCARD"));
    }

    let interior = &properties[1..properties.len() - 1];

    for (line_num, prop) in interior {
        if prop.name == names::BEGIN || prop.name == names::END {
            return Err(ParseError::structural(
                *line_num,
                format!("{} inside card body", prop.name),
            ));
        }
    }

    check_exactly_one(interior, names::VERSION, *last_line)?;
    check_exactly_one(interior, names::FN, *last_line)?;

    Ok(())
}

fn check_exactly_one(
    interior: &[(usize, Property)],
    name: &str,
    end_line: usize,
) -> ParseResult<()> {
    let mut found = None;
    for (line_num, prop) in interior {
        if prop.name == name {
            if found.is_some() {
                return Err(ParseError::structural(
                    *line_num,
                    format!("more than one {name} property"),
                ));
            }
            found = Some(*line_num);
        }
    }

    if found.is_none() {
        return Err(ParseError::structural(
            end_line,
            format!("missing {name} property"),
        ));
    }

    Ok(())
}

/// Returns whether `prop` is the named envelope line with value `VCARD`.
fn is_envelope_line(prop: &Property, name: &str) -> bool {
    prop.name == name
        && prop
            .as_text()
            .is_some_and(|v| v.eq_ignore_ascii_case(names::VCARD))
}
