//! Facade Wire Shape
//!
//! The facade serializes with variant-specific field names, unlike the tagged
//! value's uniform `tag`/`inner` shape:
//!
//! ```text
//! {"kind": "ok", "value": 5}
//! {"kind": "err", "error": "boom"}
//! ```
//!
//! Serialization is written directly against `serialize_struct`.
//! Deserialization goes through an internally tagged mirror enum whose
//! lowercase variant names supply `kind` and whose struct-variant fields
//! supply `value`/`error`. Malformed input surfaces through serde's own error
//! type (`missing_field`, `unknown_variant`); deserialization never panics.

use crate::outcome::Outcome;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Success(value) => {
                state.serialize_field("kind", "ok")?;
                state.serialize_field("value", value)?;
            }
            Outcome::Failure(error) => {
                state.serialize_field("kind", "err")?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Deserialization mirror: internally tagged on `kind`, struct-variant fields
/// carry the per-variant payload names.
#[derive(serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Shape<T, E> {
    Ok { value: T },
    Err { error: E },
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Shape::<T, E>::deserialize(deserializer)? {
            Shape::Ok { value } => Ok(Outcome::Success(value)),
            Shape::Err { error } => Ok(Outcome::Failure(error)),
        }
    }
}
