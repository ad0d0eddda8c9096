//! Card store operations: load, create, rename.

use std::path::{Path, PathBuf};

use meishi_core::constants::is_card_extension;
use meishi_vcf::{Card, ValidationError, parse_card, serialize, validate};

use crate::error::{StoreError, StoreResult};
use crate::io::{read_card_file, write_card_file};

/// A card together with its backing file.
///
/// Produced by [`load_card`] or [`create_card`]; mutated only through
/// [`rename_contact`], which re-serializes and rewrites the file so memory
/// and disk never drift apart. Once the backing file is deleted the
/// instance is stale and must not be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCard {
    card: Card,
    path: PathBuf,
}

impl StoredCard {
    /// The in-memory card.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The per-file result of a directory load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// The file this outcome describes.
    pub path: PathBuf,
    /// The loaded card, or why this file was skipped.
    pub result: StoreResult<StoredCard>,
}

/// Loads and validates a single card file.
///
/// ## Errors
/// Returns `NotFound`/`Io` for file failures, a parse error for malformed
/// content, or a validation error for semantically broken cards.
#[tracing::instrument]
pub fn load_card(path: &Path) -> StoreResult<StoredCard> {
    let text = read_card_file(path)?;
    let card = parse_card(&text)?;
    validate(&card)?;

    Ok(StoredCard {
        card,
        path: path.to_path_buf(),
    })
}

/// Loads every card file in `directory`.
///
/// Files are matched by extension (`.vcf`/`.vcard`) and processed in file
/// name order. A file that fails to parse or validate yields an outcome
/// carrying its error and is logged; it never aborts the rest of the batch.
///
/// ## Errors
/// Returns `Io` only if the directory itself cannot be enumerated.
#[tracing::instrument]
pub fn load_all_cards(directory: &Path) -> StoreResult<Vec<LoadOutcome>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(directory)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| has_card_extension(path))
        .collect();
    paths.sort();

    let outcomes: Vec<LoadOutcome> = paths
        .into_iter()
        .map(|path| {
            let result = load_card(&path);
            if let Err(err) = &result {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable card");
            }
            LoadOutcome { path, result }
        })
        .collect();

    tracing::debug!(count = outcomes.len(), "directory scan complete");
    Ok(outcomes)
}

/// Creates a new card file with the given formatted name.
///
/// ## Errors
/// Returns `InvalidFileName` for paths without a card extension,
/// `DuplicatePath` if a file already exists at `path`, a validation error
/// for an empty name, or `Io` if the write fails.
#[tracing::instrument]
pub fn create_card(path: &Path, display_name: &str) -> StoreResult<StoredCard> {
    if !has_card_extension(path) {
        return Err(StoreError::InvalidFileName(path.to_path_buf()));
    }
    if path.exists() {
        return Err(StoreError::DuplicatePath(path.to_path_buf()));
    }

    let card = Card::new(display_name);
    validate(&card)?;
    write_card_file(path, &serialize(&card))?;

    tracing::info!(path = %path.display(), "card created");
    Ok(StoredCard {
        card,
        path: path.to_path_buf(),
    })
}

/// Replaces the contact's formatted name and rewrites the backing file.
///
/// Every other property and the overall order are preserved. The operation
/// is all-or-nothing: the in-memory card changes only after the new file
/// content is safely in place, and a failed write leaves the prior file
/// intact.
///
/// ## Errors
/// Returns a validation error for an empty name or a card the change would
/// leave invalid, or `Io` if the write fails.
#[tracing::instrument(skip(stored))]
pub fn rename_contact(stored: &mut StoredCard, new_name: &str) -> StoreResult<()> {
    if new_name.is_empty() {
        return Err(ValidationError::EmptyFn.into());
    }

    let mut updated = stored.card.clone();
    if !updated.set_formatted_name(new_name) {
        return Err(ValidationError::FnCount(0).into());
    }
    validate(&updated)?;

    write_card_file(&stored.path, &serialize(&updated))?;
    stored.card = updated;

    tracing::info!(path = %stored.path.display(), "contact renamed");
    Ok(())
}

/// Returns whether `path` carries a recognized card file extension.
fn has_card_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_card_extension)
}
