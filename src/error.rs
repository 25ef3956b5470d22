//! Error types for the Bakery UI notification crate.
//!
//! Lifecycle operations never fail; redundant requests are no-ops. The only
//! fallible surface is turning text (config values, CLI input) into the
//! notification enums.

use thiserror::Error;

/// Errors produced while parsing notification attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown notification kind '{0}' (expected success, error, warning or info)")]
    UnknownKind(String),

    #[error(
        "unknown notification position '{0}' \
         (expected top-left, top-right, bottom-left, bottom-right, top-center or bottom-center)"
    )]
    UnknownPosition(String),
}

pub type Result<T> = std::result::Result<T, Error>;
