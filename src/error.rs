//! Centralized error handling for Restext.
//!
//! All failure conditions are propagated through the `Result` type; the crate
//! contains no panicking paths (enforced by `#![deny(clippy::panic)]` and
//! `#![deny(clippy::unwrap_used)]`).
//!
//! ## Error Categories
//!
//! - **I/O Errors** ([`RestextError::Io`]): opening, reading or writing the
//!   document file. Always fatal for the operation in progress.
//! - **Format Errors** ([`RestextError::Format`]): malformed scalar tokens,
//!   headers or backreferences. Recoverable per field during a read.
//! - **Unknown Keys** ([`RestextError::UnknownKey`]): a field key no field of
//!   the target node accepts. The reader treats this as a warning.
//! - **Invalid Subresources** ([`RestextError::InvalidSubresource`]): a key
//!   flagged as subresource for which no child node can be produced.
//! - **Internal Errors** ([`RestextError::Internal`]): logic errors that
//!   should not occur in production.
//!
//! Type mismatches between a chunk and the node it binds to are deliberately
//! *not* an error kind: they are reported as warnings only.

use std::fmt;
use std::io;
use std::sync::Arc;

/// A specialized `Result` type for Restext operations.
pub type Result<T> = std::result::Result<T, RestextError>;

/// The master error enum covering all failure domains in Restext.
///
/// This type is `Clone` so errors can be stored for later analysis; I/O
/// errors are wrapped in `Arc` to make cloning cheap.
#[derive(Debug, Clone)]
pub enum RestextError {
    /// Low-level I/O failure (file not found, permission denied, disk full).
    ///
    /// Fatal: a failed write aborts the whole serialization pass and may
    /// leave a truncated file behind; no atomic rename is performed.
    Io(Arc<io::Error>),

    /// A text token does not conform to the wire grammar: a non-numeric
    /// value where a number is expected, an unquoted string, a malformed
    /// header or backreference, or an encoded value that would embed a
    /// line break.
    ///
    /// During a read this is recoverable per field: the offending field is
    /// skipped with a warning and siblings keep their values.
    Format(String),

    /// A field key that no field of the target node accepts, neither as its
    /// canonical name nor as one of its legacy aliases.
    ///
    /// The reader's forward-compatibility policy is to warn and ignore, so
    /// documents written by newer schemas still load.
    UnknownKey(String),

    /// A key flagged as subresource resolved to no child node, or a
    /// backreference pointed at a chunk that does not exist.
    InvalidSubresource(String),

    /// Logic error inside the engine. Should not occur in production;
    /// please report with a reproduction case.
    Internal(String),
}

impl fmt::Display for RestextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O Error: {e}"),
            Self::Format(s) => write!(f, "Format Error: {s}"),
            Self::UnknownKey(s) => write!(f, "Unknown Key: {s}"),
            Self::InvalidSubresource(s) => write!(f, "Invalid Subresource: {s}"),
            Self::Internal(s) => write!(f, "Internal Logic Error: {s}"),
        }
    }
}

impl std::error::Error for RestextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RestextError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
