//! Card property type.

use super::parameter::Parameter;
use super::value::Value;

/// One card property: a single logical line of a card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// The value, plain or structured.
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Text(value.into()),
        }
    }

    /// Creates a property with a structured value.
    #[must_use]
    pub fn structured(name: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Structured(parts),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }
}

/// Common property names as constants.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";
    pub const KIND: &str = "KIND";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Organizational
    pub const ORG: &str = "ORG";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";

    /// The value of the envelope lines: `BEGIN:VCARD` / `END:VCARD`.
    pub const VCARD: &str = "VCARD";

    /// Properties that may appear at most once outside the envelope.
    pub const AT_MOST_ONCE: [&str; 6] = [KIND, N, GENDER, PRODID, REV, UID];
}
