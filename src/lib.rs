//! # Restext
//!
//! A line-oriented text persistence engine for trees of heterogeneous,
//! schema-versioned resources.
//!
//! ## Overview
//!
//! Restext linearizes a tree of application objects, including nested,
//! independently-typed owned sub-objects, into a single human-readable
//! document, and reconstructs that tree from an unordered bag of text
//! chunks. Nodes keep their wiring loose on purpose: the engine sees only
//! the [`Persistable`] capability, never concrete types, and documents stay
//! loadable across schema renames through per-field legacy aliases.
//!
//! ### Key Features
//!
//! *   **Order-insensitive reading:** phase 1 indexes every chunk by id
//!     before phase 2 binds anything, so block order in the file never
//!     matters.
//! *   **Schema migration:** every field carries an ordered list of legacy
//!     alias names; a document written under an old field name loads into
//!     the renamed field unchanged.
//! *   **Forward compatibility:** keys the live schema does not know are
//!     warned about and skipped, never fatal.
//! *   **Per-field recovery:** a malformed scalar or dangling backreference
//!     costs exactly that field; siblings still bind.
//!
//! ## The Wire Format
//!
//! One text block per node, each opened by a bracketed header and closed by
//! a blank separator line. Every subresource block is written above the
//! block referencing it:
//!
//! ```text
//! [level = Subresource, id = 2, type = cfg]
//! gpu = 4294967295
//! logLevel = E6
//!
//! [level = Resource, id = 1, type = proj]
//! name = 'demo'
//! entries = Subresource(2)
//! ```
//!
//! Scalar tokens: strings are single-quoted, integers and floats are
//! decimal literals, booleans are `true`/`false`, bit-flag enumerations are
//! `E<integer>`, and `Subresource(<id>)` backreferences link a field to the
//! chunk holding its child.
//!
//! ## Core Concepts
//!
//! ### `Persistable`
//!
//! The [`Persistable`] trait is the uniform surface every tree node
//! implements: id, type tag, ordered field keys, keyed get/set and
//! subresource access. Writer and reader are polymorphic over this
//! capability alone.
//!
//! ### `Field`
//!
//! A [`Field`] is a named, typed slot holding one scalar value plus the
//! alias list used for schema migration. Node implementations chain
//! [`Field::try_assign`] to build their keyed set surface.
//!
//! ### Writer and Reader
//!
//! The [`writer`] walks the tree depth-first and emits children-first; the
//! [`RestextReader`] chunks the document (phase 1) and binds chunks onto a
//! live tree by field name and id (phase 2).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use restext::{Field, Persistable, ResourceId, Restext};
//!
//! // `Config` implements `Persistable` over its declared fields.
//! let config = Config::new();
//! Restext::save("session.txt", &config)?;
//!
//! let mut fresh = Config::new();
//! let warnings = Restext::load("session.txt", &mut fresh)?;
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded, synchronous, blocking I/O. A full serialize or
//! deserialize pass over one tree must not overlap other mutation of that
//! tree; there is no internal locking. The only process-global state is the
//! monotonic id allocator behind [`ResourceId::allocate`].
//!
//! ### Safety and Error Handling
//!
//! * **No unsafe:** the crate is `#![deny(unsafe_code)]`.
//! * **No panics:** no `unwrap()` or `panic!()` outside tests (enforced by
//!   clippy lints).
//! * **Comprehensive errors:** all failures map to a [`RestextError`];
//!   recoverable read anomalies surface as warnings, observable through
//!   [`RestextReader::warnings`] and the `log` facade.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod api;
pub mod codec;
pub mod error;
pub mod field;
pub mod reader;
pub mod resource;
pub mod writer;

pub use api::Restext;
pub use codec::{EnumMask, Scalar};
pub use error::{RestextError, Result};
pub use field::{Field, KeyMatch};
pub use reader::{Chunk, RestextReader};
pub use resource::{Persistable, ResourceId};
