//! The field registry: a named, typed slot holding one scalar value.
//!
//! A [`Field`] owns its current value plus the schema-migration metadata
//! needed to keep renamed fields readable: a canonical name and an ordered
//! list of legacy aliases. Node implementations build their keyed get/set
//! surface by chaining [`Field::try_assign`] across all declared fields.

use crate::codec::Scalar;
use crate::error::Result;

/// Outcome of matching a document key against a field's name set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Exact match on the canonical name.
    Canonical,
    /// Match on one of the legacy aliases.
    Legacy,
    /// The key belongs to a different field (or to no field at all).
    Invalid,
}

/// A named slot holding one scalar value.
///
/// The name set is fixed at construction. Aliases are an ordered,
/// never-deduplicated list checked in declaration order, first match wins;
/// an alias must not collide with another field's canonical name or
/// aliases, that invariant is the declaring node's responsibility.
#[derive(Debug, Clone)]
pub struct Field<T: Scalar> {
    name: &'static str,
    aliases: &'static [&'static str],
    value: T,
}

impl<T: Scalar> Field<T> {
    /// Creates a field with its initial value, canonical name and legacy
    /// alias list.
    pub fn new(initial: T, name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            value: initial,
        }
    }

    /// The canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrows the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the current value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Classifies `key` against the canonical name and the alias list.
    pub fn matches(&self, key: &str) -> KeyMatch {
        if key == self.name {
            KeyMatch::Canonical
        } else if self.aliases.iter().any(|alias| *alias == key) {
            KeyMatch::Legacy
        } else {
            KeyMatch::Invalid
        }
    }

    /// Renders the current value as its wire token.
    pub fn encode(&self) -> String {
        self.value.encode()
    }

    /// Attempts to accept `key` and decode `text` into this field.
    ///
    /// Returns `None` when the key matches neither the canonical name nor
    /// an alias, so callers can fall through to the next field. Canonical
    /// and legacy matches are treated identically.
    pub fn try_assign(&mut self, key: &str, text: &str) -> Option<Result<()>> {
        match self.matches(key) {
            KeyMatch::Invalid => None,
            KeyMatch::Canonical | KeyMatch::Legacy => Some(match T::decode(text) {
                Ok(value) => {
                    self.value = value;
                    Ok(())
                }
                Err(e) => Err(e),
            }),
        }
    }
}
