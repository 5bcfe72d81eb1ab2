//! Tagged Outcome Values
//!
//! The substrate every operation reads and produces: a closed two-variant
//! tagged value with no behavior attached. Exhaustive pattern matching gives
//! the totality invariant for free — every instance is exactly one of `Ok` or
//! `Err`, never both, never partially constructed.
//!
//! Values are immutable after construction. Every transformation in
//! [`crate::ops`] consumes its input and produces a new value; nothing in this
//! crate mutates a payload in place.
//!
//! # Wire shape
//!
//! With the `serde` feature, a `RawOutcome` serializes adjacently tagged with
//! a uniform payload field regardless of variant:
//!
//! ```text
//! {"tag": "ok", "inner": 5}
//! {"tag": "err", "inner": "boom"}
//! ```
//!
//! This is deliberately distinct from the facade's `kind`/`value`/`error`
//! shape (see [`crate::outcome`]); existing consumers may depend on either.

/// A success-or-failure value: either `Ok` carrying a payload of type `T`,
/// or `Err` carrying an error payload of type `E`.
///
/// Equality is tag equality plus payload equality under the payload's own
/// `PartialEq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "tag", content = "inner", rename_all = "lowercase")
)]
pub enum RawOutcome<T, E> {
    /// Contains the success payload
    Ok(T),
    /// Contains the error payload
    Err(E),
}

/// Wrap a value as a success. Construction cannot fail.
#[inline]
pub fn success<T, E>(value: T) -> RawOutcome<T, E> {
    RawOutcome::Ok(value)
}

/// Wrap an error as a failure. Construction cannot fail.
#[inline]
pub fn failure<T, E>(error: E) -> RawOutcome<T, E> {
    RawOutcome::Err(error)
}

impl<T, E> From<Result<T, E>> for RawOutcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RawOutcome::Ok(value),
            Err(error) => RawOutcome::Err(error),
        }
    }
}

impl<T, E> From<RawOutcome<T, E>> for Result<T, E> {
    fn from(raw: RawOutcome<T, E>) -> Self {
        match raw {
            RawOutcome::Ok(value) => Ok(value),
            RawOutcome::Err(error) => Err(error),
        }
    }
}
