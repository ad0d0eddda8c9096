//! vCard (.vcf) format library.
//!
//! This crate provides the in-memory card model, parsing, validation, the
//! date codec, and canonical serialization for single-contact vCard files.
//!
//! ## Overview
//!
//! A card file holds one contact wrapped in a `BEGIN:VCARD` / `VERSION` /
//! `END:VCARD` envelope. The envelope lines are kept as ordinary entries in
//! the card's ordered property sequence, so serialization reproduces the
//! file structurally and validation can re-check the envelope on cards that
//! were assembled in memory.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use meishi_vcf::parse_card;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let card = parse_card(input).unwrap();
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use meishi_vcf::{Card, serialize};
//!
//! let card = Card::new("Jane Doe");
//! let output = serialize(&card);
//! assert!(output.contains("FN:Jane Doe"));
//! ```
//!
//! ## Round-trip fidelity
//!
//! Serialization is canonical: property and parameter names are uppercased,
//! values are re-escaped, lines end in CRLF and fold at 75 octets. For every
//! card `c`, `parse_card(serialize(c))` equals `c`; byte-for-byte
//! preservation of arbitrary input spelling is not guaranteed.

pub mod build;
pub mod core;
pub mod date;
pub mod parse;
pub mod validate;

pub use self::core::{Card, Parameter, Property, Value};
pub use build::serialize;
pub use date::{DateError, decode_date, encode_date};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_card};
pub use validate::{ValidationError, validate};
