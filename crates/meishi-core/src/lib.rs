//! Shared foundation for the meishi workspace.
//!
//! Holds the pieces every other crate needs: the stable [`error::ErrorCode`]
//! enum that callers branch on, configuration loading, and the handful of
//! constants (file extensions, emitted vCard version) the format and store
//! layers agree on.

pub mod config;
pub mod constants;
pub mod error;
