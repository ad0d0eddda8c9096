//! Read-only contact summary projection.

use meishi_vcf::core::names;
use meishi_vcf::decode_date;

use crate::store::StoredCard;

/// Property names excluded from the "other properties" count: the envelope
/// plus the fields the summary already surfaces on their own.
const SUMMARIZED: [&str; 6] = [
    names::BEGIN,
    names::END,
    names::VERSION,
    names::FN,
    names::BDAY,
    names::ANNIVERSARY,
];

/// A flattened, disposable view of one stored card.
///
/// Recomputed on demand by [`summarize`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    /// Backing file name (without directory).
    pub file_name: String,
    /// The formatted name.
    pub display_name: String,
    /// Decoded (display-form) birthday, if present.
    pub birthday: Option<String>,
    /// Decoded (display-form) anniversary, if present.
    pub anniversary: Option<String>,
    /// Count of properties beyond the envelope and the fields above.
    pub other_property_count: usize,
}

/// Projects a stored card into a [`ContactSummary`].
///
/// Dates that fail to decode are summarized as absent rather than failing
/// the projection; a validated card always decodes.
#[must_use]
pub fn summarize(stored: &StoredCard) -> ContactSummary {
    let card = stored.card();

    let file_name = stored
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let decoded = |wire: Option<&str>| {
        wire.and_then(|w| decode_date(w).ok())
            .filter(|d| !d.is_empty())
    };

    let other_property_count = card
        .properties()
        .iter()
        .filter(|p| !SUMMARIZED.contains(&p.name.as_str()))
        .count();

    ContactSummary {
        file_name,
        display_name: card.formatted_name().unwrap_or_default().to_string(),
        birthday: decoded(card.birthday()),
        anniversary: decoded(card.anniversary()),
        other_property_count,
    }
}
