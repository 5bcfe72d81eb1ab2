//! Object-Style Outcome Facade
//!
//! [`Outcome`] is a lossless alternate projection of [`RawOutcome`]: the same
//! two-variant invariant, exposed as chainable instance methods instead of
//! free functions. Every `RawOutcome` maps to exactly one `Outcome` variant
//! and payload, and back (a bijection on tag plus payload).
//!
//! Methods here are thin wrappers over [`crate::ops`] through the
//! [`Outcome::from_raw`] / [`Outcome::into_raw`] bridge. The semantics live in
//! one place; the facade only changes the calling convention.
//!
//! ```
//! use outcome_core::Outcome;
//!
//! let n = Outcome::<i32, &str>::success(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| Outcome::success(x + 1))
//!     .unwrap_or(0);
//! assert_eq!(n, 11);
//! ```

use crate::ops;
use crate::raw::RawOutcome;
use std::fmt;

/// A success-or-failure value with method-chaining combinators.
///
/// The canonical text rendering (`Display`) is `Ok(<value>)` / `Err(<error>)`
/// using the payload's own `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// A completed, valid outcome carrying a result payload
    Success(T),
    /// A recoverable error outcome carrying an error payload
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a value as a success. Construction cannot fail.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wrap an error as a failure. Construction cannot fail.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// The conversion bridge: project a tagged value onto the facade.
    ///
    /// Total, and the identity projection: `from_raw(success(x))` is
    /// observationally equal to `Outcome::success(x)`, and symmetrically for
    /// failures.
    #[inline]
    pub fn from_raw(raw: RawOutcome<T, E>) -> Self {
        match raw {
            RawOutcome::Ok(value) => Outcome::Success(value),
            RawOutcome::Err(error) => Outcome::Failure(error),
        }
    }

    /// The reverse bridge: project the facade back onto the tagged value.
    #[inline]
    pub fn into_raw(self) -> RawOutcome<T, E> {
        match self {
            Outcome::Success(value) => RawOutcome::Ok(value),
            Outcome::Failure(error) => RawOutcome::Err(error),
        }
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`. Mutually exclusive with
    /// [`Outcome::is_ok`] and exhaustive over the two variants.
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is a `Success` whose payload satisfies `pred`.
    #[inline]
    pub fn is_ok_and<P: FnOnce(T) -> bool>(self, pred: P) -> bool {
        ops::is_ok_and(self.into_raw(), pred)
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `pred`.
    #[inline]
    pub fn is_err_and<P: FnOnce(E) -> bool>(self, pred: P) -> bool {
        ops::is_err_and(self.into_raw(), pred)
    }

    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Accessing the payload of the wrong variant is a programming error:
    /// panics with `Called value on a Failure`.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("Called value on a Failure"),
        }
    }

    /// Borrow the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `Called error on a Success` on the wrong variant.
    #[inline]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Success(_) => panic!("Called error on a Success"),
            Outcome::Failure(error) => error,
        }
    }

    /// Converts to `Option<T>`, discarding the error, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        ops::ok(self.into_raw())
    }

    /// Converts to `Option<E>`, discarding the success payload, if any.
    #[inline]
    pub fn err(self) -> Option<E> {
        ops::err(self.into_raw())
    }

    /// Applies `op` to the success payload, leaving a `Failure` untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        Outcome::from_raw(ops::map(self.into_raw(), op))
    }

    /// Applies `op` to the success payload, or returns `default` (eager).
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, op: F) -> U {
        ops::map_or(self.into_raw(), default, op)
    }

    /// Applies `op` to the success payload, or `fallback` to the error
    /// (both lazy; exactly one is invoked).
    #[inline]
    pub fn map_or_else<U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(self, fallback: D, op: F) -> U {
        ops::map_or_else(self.into_raw(), fallback, op)
    }

    /// Applies `op` to the error payload, leaving a `Success` untouched.
    #[inline]
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Outcome<T, F> {
        Outcome::from_raw(ops::map_err(self.into_raw(), op))
    }

    /// Invokes `op` with a reference to the success payload, for its side
    /// effect only; returns the receiver unchanged.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, op: F) -> Self {
        if let Outcome::Success(ref value) = self {
            op(value);
        }
        self
    }

    /// Invokes `op` with a reference to the error payload, for its side
    /// effect only; returns the receiver unchanged.
    #[inline]
    pub fn inspect_err<F: FnOnce(&E)>(self, op: F) -> Self {
        if let Outcome::Failure(ref error) = self {
            op(error);
        }
        self
    }

    /// Returns the success payload, panicking with `msg` on a `Failure`.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        ops::expect(self.into_raw(), msg)
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `Called unwrap on an Err value` on a `Failure`.
    #[inline]
    pub fn unwrap(self) -> T {
        ops::unwrap(self.into_raw())
    }

    /// Returns the success payload, or `default` on a `Failure` (eager).
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        ops::unwrap_or(self.into_raw(), default)
    }

    /// Returns the success payload, or `op(error)` on a `Failure` (lazy).
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        ops::unwrap_or_else(self.into_raw(), op)
    }

    /// Returns the error payload, panicking with `msg` on a `Success`.
    #[inline]
    pub fn expect_err(self, msg: &str) -> E {
        ops::expect_err(self.into_raw(), msg)
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `Called unwrapErr on an Ok value` on a `Success`.
    #[inline]
    pub fn unwrap_err(self) -> E {
        ops::unwrap_err(self.into_raw())
    }

    /// Returns `other` if this is a `Success`, otherwise the receiver's
    /// failure. The argument is eagerly evaluated; see [`Outcome::and_then`].
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        Outcome::from_raw(ops::and(self.into_raw(), other.into_raw()))
    }

    /// Calls `op` with the success payload, otherwise returns the receiver's
    /// failure; `op` is never invoked on a `Failure`.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, op: F) -> Outcome<U, E> {
        Outcome::from_raw(ops::and_then(self.into_raw(), |value| {
            op(value).into_raw()
        }))
    }

    /// Returns the receiver if it is a `Success`, otherwise `other` (eager).
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        Outcome::from_raw(ops::or(self.into_raw(), other.into_raw()))
    }

    /// Returns the receiver if it is a `Success`, otherwise calls `op` with
    /// the error (lazy).
    #[inline]
    pub fn or_else<F, O: FnOnce(E) -> Outcome<T, F>>(self, op: O) -> Outcome<T, F> {
        Outcome::from_raw(ops::or_else(self.into_raw(), |error| {
            op(error).into_raw()
        }))
    }

    /// Invokes exactly one of the two handlers based on the variant and
    /// returns its result.
    #[inline]
    pub fn fold<U, S: FnOnce(T) -> U, F: FnOnce(E) -> U>(self, on_ok: S, on_err: F) -> U {
        ops::fold(self.into_raw(), on_ok, on_err)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Ok({value})"),
            Outcome::Failure(error) => write!(f, "Err({error})"),
        }
    }
}

impl<T, E> From<RawOutcome<T, E>> for Outcome<T, E> {
    fn from(raw: RawOutcome<T, E>) -> Self {
        Outcome::from_raw(raw)
    }
}

impl<T, E> From<Outcome<T, E>> for RawOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_raw()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
