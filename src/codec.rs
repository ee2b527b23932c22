//! The primitive codec: scalar values to and from canonical text tokens.
//!
//! # Token Forms
//!
//! | Value kind     | Token                  |
//! |----------------|------------------------|
//! | string         | `'...'` (single-quoted)|
//! | integer/float  | decimal literal        |
//! | bool           | `true` / `false`       |
//! | enum/bitmask   | `E<integer>`           |
//! | backreference  | `Subresource(<id>)`    |
//!
//! The contract is `decode(encode(x)) == x` for every representable `x`.
//! A token never contains a line break; strings carry no escape mechanism,
//! so a string with an embedded newline is unrepresentable (the writer
//! rejects it at serialization time).

use crate::error::{RestextError, Result};
use crate::resource::ResourceId;

/// A scalar value that can be converted to and from its wire token.
///
/// Implemented for the integer and float primitives, `bool`, `String` and
/// [`EnumMask`]. [`decode`](Scalar::decode) never panics: malformed text
/// yields [`RestextError::Format`] and the caller decides default-vs-abort.
pub trait Scalar: Sized {
    /// Renders the value as its canonical token.
    fn encode(&self) -> String;

    /// Parses a token back into the value.
    fn decode(text: &str) -> Result<Self>;
}

macro_rules! impl_scalar_numeric {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }

                fn decode(text: &str) -> Result<Self> {
                    text.trim().parse::<$ty>().map_err(|_| {
                        RestextError::Format(format!(
                            "expected {} literal, got `{text}`", $what
                        ))
                    })
                }
            }
        )*
    };
}

impl_scalar_numeric! {
    u32 => "unsigned integer",
    u64 => "unsigned integer",
    i32 => "integer",
    i64 => "integer",
    f32 => "float",
    f64 => "float",
}

impl Scalar for bool {
    fn encode(&self) -> String {
        if *self { "true".into() } else { "false".into() }
    }

    fn decode(text: &str) -> Result<Self> {
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(RestextError::Format(format!(
                "expected `true` or `false`, got `{other}`"
            ))),
        }
    }
}

impl Scalar for String {
    fn encode(&self) -> String {
        format!("'{self}'")
    }

    /// Strings are sliced between the first and last quote, so interior
    /// quote characters round-trip without an escape mechanism.
    fn decode(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.len() >= 2 && trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            Ok(trimmed[1..trimmed.len() - 1].to_owned())
        } else {
            Err(RestextError::Format(format!(
                "expected single-quoted string, got `{text}`"
            )))
        }
    }
}

/// A bit-flag enumeration value, stored as its raw integer representation.
///
/// The wire token is `E<integer>`, e.g. `E6`. The engine carries the raw
/// bits only; mapping them onto a domain enum is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnumMask(pub u32);

impl EnumMask {
    /// Returns the raw bit pattern.
    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl Scalar for EnumMask {
    fn encode(&self) -> String {
        format!("E{}", self.0)
    }

    fn decode(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('E').ok_or_else(|| {
            RestextError::Format(format!("expected `E<integer>`, got `{text}`"))
        })?;
        let bits = digits.parse::<u32>().map_err(|_| {
            RestextError::Format(format!("expected `E<integer>`, got `{text}`"))
        })?;
        Ok(Self(bits))
    }
}

/// Renders the backreference token linking a field to its child's chunk.
pub fn encode_backref(id: ResourceId) -> String {
    format!("Subresource({})", id.as_u64())
}

/// Parses a `Subresource(<id>)` backreference token.
pub fn parse_backref(text: &str) -> Result<ResourceId> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("Subresource(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            RestextError::Format(format!("expected `Subresource(<id>)`, got `{text}`"))
        })?;
    let raw = inner.trim().parse::<u64>().map_err(|_| {
        RestextError::Format(format!("backreference id is not an integer: `{text}`"))
    })?;
    Ok(ResourceId::from_raw(raw))
}
