//! The card aggregate.

use meishi_core::constants::EMITTED_VERSION;

use super::property::{Property, names};

/// One contact card.
///
/// Holds the full ordered property sequence of the backing file, envelope
/// lines included. Order is preserved on round-trip; consumers may depend on
/// it. Well-formedness (envelope, exactly one FN) is established by the
/// parser or [`Card::new`] and re-checked by the validator, since a card can
/// also be assembled from raw properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    properties: Vec<Property>,
}

impl Card {
    /// Creates a minimal valid card: envelope plus the given formatted name.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            properties: vec![
                Property::text(names::BEGIN, names::VCARD),
                Property::text(names::VERSION, EMITTED_VERSION),
                Property::text(names::FN, display_name),
                Property::text(names::END, names::VCARD),
            ],
        }
    }

    /// Assembles a card from an already-ordered property sequence.
    ///
    /// No structural checks are applied; run [`crate::validate`] before
    /// trusting the result.
    #[must_use]
    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The full property sequence, envelope included, in file order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Iterates over every property with the given name.
    pub fn properties_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// The VERSION value, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.property(names::VERSION)?.as_text()
    }

    /// The formatted name (FN value), if present.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.property(names::FN)?.as_text()
    }

    /// The raw wire-form BDAY value, if present.
    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.property(names::BDAY)?.as_text()
    }

    /// The raw wire-form ANNIVERSARY value, if present.
    #[must_use]
    pub fn anniversary(&self) -> Option<&str> {
        self.property(names::ANNIVERSARY)?.as_text()
    }

    /// Replaces the FN value in place, leaving every other property and the
    /// overall order untouched.
    ///
    /// Returns `false` when the card has no FN property to replace.
    pub fn set_formatted_name(&mut self, display_name: impl Into<String>) -> bool {
        let Some(fn_prop) = self
            .properties
            .iter_mut()
            .find(|p| p.name == names::FN)
        else {
            return false;
        };
        fn_prop.value = super::value::Value::Text(display_name.into());
        true
    }
}
