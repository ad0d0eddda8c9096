//! Line unfolding and content line parsing.
//!
//! Card files fold long lines by continuing them on the next physical line
//! behind a single space or tab (RFC 6350 §3.2). Unfolding strips exactly
//! that one character and joins the rest directly onto the previous logical
//! line, with no inserted separator.

use super::error::{ParseError, ParseResult};
use crate::core::Parameter;

/// Splits raw input into logical lines, merging folded continuations.
///
/// Accepts CRLF and bare LF endings. Blank lines between properties are
/// skipped. Each logical line carries the 1-based number of its first
/// physical line.
///
/// ## Errors
/// Returns a `MalformedInput` error if the first non-blank line is a
/// continuation, since there is nothing for it to continue.
pub fn split_lines(input: &str) -> ParseResult<Vec<(usize, String)>> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let line_num = i + 1;

        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = strip_fold_marker(line) {
            let Some((_, prev)) = lines.last_mut() else {
                return Err(ParseError::malformed(
                    line_num,
                    "continuation line with nothing to continue",
                ));
            };
            prev.push_str(continuation);
        } else {
            lines.push((line_num, line.to_string()));
        }
    }

    Ok(lines)
}

/// Strips the single-character fold marker, if this is a continuation line.
fn strip_fold_marker(line: &str) -> Option<&str> {
    line.strip_prefix(' ').or_else(|| line.strip_prefix('\t'))
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<Parameter>,
    /// Raw value string, still escaped.
    pub value: String,
}

/// Parses a single logical line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns a `PropertyFormat` error if the colon separator is missing, the
/// property name is empty or carries invalid characters, or a parameter is
/// malformed.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    // Find the colon separating name/params from value
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::property_format(line_num, "missing colon separator")
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    // Parse group and name
    let (group, name_params) = parse_group(name_params);

    // Split name from parameters
    let (name, params_str) = if let Some(semi_pos) = name_params.find(';') {
        (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..]))
    } else {
        (name_params, None)
    };

    // Validate property name
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::property_format(
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    // Parse parameters
    let params = if let Some(params_str) = params_str {
        parse_parameters(params_str, line_num)?
    } else {
        Vec::new()
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        // Group must be alphanumeric + hyphen
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses the parameter segment into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<Parameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns the remaining string.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(Parameter, &str)> {
    let eq_pos = s
        .find('=')
        .ok_or_else(|| ParseError::property_format(line_num, "missing = in parameter"))?;

    let name = &s[..eq_pos];
    if name.is_empty() {
        return Err(ParseError::property_format(line_num, "empty parameter name"));
    }

    let after_eq = &s[eq_pos + 1..];
    let (values, remaining) = parse_param_values(after_eq);

    if values.iter().all(String::is_empty) {
        return Err(ParseError::property_format(
            line_num,
            format!("parameter {name} has no value"),
        ));
    }

    Ok((Parameter::multi(name, values), remaining))
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    while let Some(&c) = chars.peek() {
        consumed += c.len_utf8();

        match c {
            '"' => {
                chars.next();
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                chars.next();
                values.push(std::mem::take(&mut current_value));
            }
            ';' if !in_quotes => {
                // Next parameter
                chars.next();
                values.push(current_value);
                return (values, &s[consumed..]);
            }
            _ => {
                chars.next();
                current_value.push(c);
            }
        }
    }

    // End of string
    values.push(current_value);
    (values, "")
}
