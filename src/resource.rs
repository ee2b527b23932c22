//! The persistable-node capability.
//!
//! Every node in a resource tree implements [`Persistable`]: a uniform
//! surface of id, type tag, ordered field keys, keyed get/set and
//! subresource access. The writer and reader depend only on this trait,
//! never on concrete node types.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

/// Process-wide allocator backing [`ResourceId::allocate`].
///
/// Initialized once at process start, incremented atomically on node
/// construction, never decremented or reset. Ids are unique for the process
/// lifetime and are never recycled, so a document written late in a session
/// can never alias an id written early in it.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A strong type identifying one persistable node.
///
/// Assigned once at construction and never reassigned; the first node
/// created in a fresh process gets id 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Draws the next id from the process-wide counter.
    pub fn allocate() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw id parsed from a document backreference.
    ///
    /// This never touches the allocator: ids read from documents identify
    /// chunks, not live nodes.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({})", self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The capability every tree node exposes to the engine.
///
/// A node declares an ordered key list covering scalar fields and
/// subresource edges alike; the same list drives writing and validates
/// reading. Scalar keys are accessed through [`get_field`] and
/// [`set_field`] as wire-format text; subresource keys resolve to owned
/// child nodes.
///
/// Ownership is strictly tree-shaped: a child has exactly one owning field,
/// so the reachable graph is acyclic by construction. The engine assumes
/// this and terminates by structural descent, it performs no cycle
/// detection.
///
/// [`get_field`]: Persistable::get_field
/// [`set_field`]: Persistable::set_field
pub trait Persistable {
    /// The node's process-unique id.
    fn id(&self) -> ResourceId;

    /// Short tag naming the node's type, e.g. `cfg`.
    fn type_tag(&self) -> &str;

    /// Every field key, scalar and subresource alike, in declaration order.
    ///
    /// List-backed nodes may derive keys from their current length; the
    /// order of keys that do exist is stable across calls.
    fn keys(&self) -> Vec<String>;

    /// Returns the encoded wire text of the scalar field behind `key`.
    ///
    /// Fails with [`RestextError::UnknownKey`] if the key is absent or
    /// addresses a subresource.
    ///
    /// [`RestextError::UnknownKey`]: crate::RestextError::UnknownKey
    fn get_field(&self, key: &str) -> Result<String>;

    /// Decodes `text` into the field accepting `key`.
    ///
    /// Implementations try every field in turn; a field accepts the key if
    /// it matches the canonical name or any legacy alias (both treated
    /// identically, so old documents with renamed fields load unchanged).
    /// If no field accepts, the implementation reports
    /// [`RestextError::UnknownKey`]; the reader's policy is to warn and
    /// ignore such keys.
    ///
    /// [`RestextError::UnknownKey`]: crate::RestextError::UnknownKey
    fn set_field(&mut self, key: &str, text: &str) -> Result<()>;

    /// True if `key` addresses an owned child node rather than a scalar.
    fn is_subresource(&self, key: &str) -> bool;

    /// Read-only lookup of the child behind a subresource key.
    ///
    /// Used by the writer; never mutates structure. Fails with
    /// [`RestextError::InvalidSubresource`] if no child exists for a key
    /// flagged as subresource.
    ///
    /// [`RestextError::InvalidSubresource`]: crate::RestextError::InvalidSubresource
    fn subresource(&self, key: &str) -> Result<&dyn Persistable>;

    /// Fetch-or-create access to the child behind a subresource key.
    ///
    /// Used by the reader while binding: when the addressed child does not
    /// exist yet (a list-backed subresource not grown to this index), the
    /// node lazily creates or extends it before returning. Fails with
    /// [`RestextError::InvalidSubresource`] if no child can be produced.
    ///
    /// [`RestextError::InvalidSubresource`]: crate::RestextError::InvalidSubresource
    fn subresource_mut(&mut self, key: &str) -> Result<&mut dyn Persistable>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_strictly_increasing() {
        let a = ResourceId::allocate();
        let b = ResourceId::allocate();
        let c = ResourceId::allocate();
        assert!(a < b && b < c);
    }

    #[test]
    fn raw_ids_do_not_advance_the_counter() {
        let parsed = ResourceId::from_raw(u64::MAX);
        assert_eq!(parsed.as_u64(), u64::MAX);
        // Other tests allocate concurrently, so only an upper bound is safe
        // to assert here.
        let next = ResourceId::allocate();
        assert!(next.as_u64() < u64::MAX / 2);
    }
}
