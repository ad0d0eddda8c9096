//! Card file store.
//!
//! The collaborator-facing boundary around [`meishi_vcf`]: reads and writes
//! `.vcf` files atomically, loads whole directories without letting one bad
//! file abort the batch, applies create/rename mutations that keep the
//! in-memory card and its backing file consistent, and projects read-only
//! contact summaries.
//!
//! All operations are synchronous and run to completion on the caller's
//! thread. The store provides no isolation between concurrent mutations of
//! the same path; callers serialize access per file. The atomic-write
//! contract only guarantees that observers see whole files.

pub mod contact;
pub mod error;
pub mod io;
pub mod store;

pub use contact::{ContactSummary, summarize};
pub use error::{StoreError, StoreResult};
pub use io::{read_card_file, write_card_file};
pub use store::{LoadOutcome, StoredCard, create_card, load_all_cards, load_card, rename_contact};
