//! Functional Combinator Set
//!
//! Free functions over [`RawOutcome`], implementing every operation's
//! semantics exactly once. The method-chaining facade in [`crate::outcome`]
//! wraps these functions rather than re-implementing them, so the two API
//! surfaces cannot drift apart.
//!
//! All operations are pure and total: binary combinators branch solely on the
//! first operand's tag, callbacks are `FnOnce` and invoked at most once,
//! synchronously, in the calling thread. The only side effects are those of
//! caller-supplied callbacks (`inspect`, `inspect_err`, and the mapping
//! closures).
//!
//! The `unwrap`/`expect` family is the deliberate escape hatch for caller
//! misuse: extracting the wrong variant's payload panics with a stable
//! diagnostic. A represented failure (the `Err` payload) is ordinary data,
//! never a library error — use `unwrap_or`, `unwrap_or_else`, or [`fold`] to
//! handle it without the fatal path.

use crate::raw::RawOutcome;

/// Returns `true` if the outcome is `Ok`.
#[inline]
pub fn is_ok<T, E>(r: &RawOutcome<T, E>) -> bool {
    matches!(r, RawOutcome::Ok(_))
}

/// Returns `true` if the outcome is `Err`.
#[inline]
pub fn is_err<T, E>(r: &RawOutcome<T, E>) -> bool {
    !is_ok(r)
}

/// Returns `true` if the outcome is `Ok` and the payload satisfies `pred`.
///
/// Short-circuits: `pred` is never invoked on an `Err`.
#[inline]
pub fn is_ok_and<T, E, P: FnOnce(T) -> bool>(r: RawOutcome<T, E>, pred: P) -> bool {
    match r {
        RawOutcome::Ok(value) => pred(value),
        RawOutcome::Err(_) => false,
    }
}

/// Returns `true` if the outcome is `Err` and the error satisfies `pred`.
///
/// Short-circuits: `pred` is never invoked on an `Ok`.
#[inline]
pub fn is_err_and<T, E, P: FnOnce(E) -> bool>(r: RawOutcome<T, E>, pred: P) -> bool {
    match r {
        RawOutcome::Ok(_) => false,
        RawOutcome::Err(error) => pred(error),
    }
}

/// Converts to `Option<T>`, discarding the error, if any. Never panics.
#[inline]
pub fn ok<T, E>(r: RawOutcome<T, E>) -> Option<T> {
    match r {
        RawOutcome::Ok(value) => Some(value),
        RawOutcome::Err(_) => None,
    }
}

/// Converts to `Option<E>`, discarding the success payload, if any.
/// Never panics.
#[inline]
pub fn err<T, E>(r: RawOutcome<T, E>) -> Option<E> {
    match r {
        RawOutcome::Ok(_) => None,
        RawOutcome::Err(error) => Some(error),
    }
}

/// Applies `op` to the success payload, leaving an `Err` untouched.
///
/// ```
/// use outcome_core::{failure, map, success, RawOutcome};
///
/// let r: RawOutcome<i32, &str> = success(5);
/// assert_eq!(map(r, |x| x * 2), success(10));
///
/// let r: RawOutcome<i32, &str> = failure("e");
/// assert_eq!(map(r, |x| x * 2), failure("e"));
/// ```
#[inline]
pub fn map<T, E, U, F: FnOnce(T) -> U>(r: RawOutcome<T, E>, op: F) -> RawOutcome<U, E> {
    match r {
        RawOutcome::Ok(value) => RawOutcome::Ok(op(value)),
        RawOutcome::Err(error) => RawOutcome::Err(error),
    }
}

/// Applies `op` to the success payload, or returns `default` on `Err`.
///
/// `default` is eagerly evaluated by the caller; for a lazily computed
/// fallback use [`map_or_else`].
#[inline]
pub fn map_or<T, E, U, F: FnOnce(T) -> U>(r: RawOutcome<T, E>, default: U, op: F) -> U {
    match r {
        RawOutcome::Ok(value) => op(value),
        RawOutcome::Err(_) => default,
    }
}

/// Applies `op` to the success payload, or `fallback` to the error.
/// Both branches are lazy; exactly one is invoked.
#[inline]
pub fn map_or_else<T, E, U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(
    r: RawOutcome<T, E>,
    fallback: D,
    op: F,
) -> U {
    match r {
        RawOutcome::Ok(value) => op(value),
        RawOutcome::Err(error) => fallback(error),
    }
}

/// Applies `op` to the error payload, leaving an `Ok` untouched.
#[inline]
pub fn map_err<T, E, F, O: FnOnce(E) -> F>(r: RawOutcome<T, E>, op: O) -> RawOutcome<T, F> {
    match r {
        RawOutcome::Ok(value) => RawOutcome::Ok(value),
        RawOutcome::Err(error) => RawOutcome::Err(op(error)),
    }
}

/// Invokes `op` with a reference to the success payload, for its side effect
/// only; returns the outcome unchanged in all cases.
#[inline]
pub fn inspect<T, E, F: FnOnce(&T)>(r: RawOutcome<T, E>, op: F) -> RawOutcome<T, E> {
    if let RawOutcome::Ok(ref value) = r {
        op(value);
    }
    r
}

/// Invokes `op` with a reference to the error payload, for its side effect
/// only; returns the outcome unchanged in all cases.
#[inline]
pub fn inspect_err<T, E, F: FnOnce(&E)>(r: RawOutcome<T, E>, op: F) -> RawOutcome<T, E> {
    if let RawOutcome::Err(ref error) = r {
        op(error);
    }
    r
}

/// Returns the success payload.
///
/// # Panics
///
/// Panics with `msg` (verbatim) if the outcome is an `Err`.
#[inline]
pub fn expect<T, E>(r: RawOutcome<T, E>, msg: &str) -> T {
    match r {
        RawOutcome::Ok(value) => value,
        RawOutcome::Err(_) => panic!("{msg}"),
    }
}

/// Returns the success payload.
///
/// # Panics
///
/// Panics with `Called unwrap on an Err value` if the outcome is an `Err`.
/// The diagnostic text is stable; tests may match on it.
#[inline]
pub fn unwrap<T, E>(r: RawOutcome<T, E>) -> T {
    match r {
        RawOutcome::Ok(value) => value,
        RawOutcome::Err(_) => panic!("Called unwrap on an Err value"),
    }
}

/// Returns the success payload, or `default` on `Err` (eager).
#[inline]
pub fn unwrap_or<T, E>(r: RawOutcome<T, E>, default: T) -> T {
    match r {
        RawOutcome::Ok(value) => value,
        RawOutcome::Err(_) => default,
    }
}

/// Returns the success payload, or `op(error)` on `Err` (lazy).
#[inline]
pub fn unwrap_or_else<T, E, F: FnOnce(E) -> T>(r: RawOutcome<T, E>, op: F) -> T {
    match r {
        RawOutcome::Ok(value) => value,
        RawOutcome::Err(error) => op(error),
    }
}

/// Returns the error payload.
///
/// # Panics
///
/// Panics with `msg` (verbatim) if the outcome is an `Ok`.
#[inline]
pub fn expect_err<T, E>(r: RawOutcome<T, E>, msg: &str) -> E {
    match r {
        RawOutcome::Ok(_) => panic!("{msg}"),
        RawOutcome::Err(error) => error,
    }
}

/// Returns the error payload.
///
/// # Panics
///
/// Panics with `Called unwrapErr on an Ok value` if the outcome is an `Ok`.
/// The diagnostic text is stable; tests may match on it.
#[inline]
pub fn unwrap_err<T, E>(r: RawOutcome<T, E>) -> E {
    match r {
        RawOutcome::Ok(_) => panic!("Called unwrapErr on an Ok value"),
        RawOutcome::Err(error) => error,
    }
}

/// Returns `other` if `r` is `Ok`, otherwise the `Err` of `r`.
///
/// The argument is a value, not a thunk: the caller has already computed it.
/// For a lazily computed continuation use [`and_then`].
#[inline]
pub fn and<T, E, U>(r: RawOutcome<T, E>, other: RawOutcome<U, E>) -> RawOutcome<U, E> {
    match r {
        RawOutcome::Ok(_) => other,
        RawOutcome::Err(error) => RawOutcome::Err(error),
    }
}

/// Calls `op` with the success payload, otherwise returns the `Err` of `r`.
///
/// ```
/// use outcome_core::{and_then, failure, success, RawOutcome};
///
/// let check = |x: i32| -> RawOutcome<i32, &'static str> {
///     if x > 3 { success(x) } else { failure("too small") }
/// };
/// assert_eq!(and_then(success(5), check), success(5));
/// assert_eq!(and_then(success(2), check), failure("too small"));
/// ```
#[inline]
pub fn and_then<T, E, U, F: FnOnce(T) -> RawOutcome<U, E>>(
    r: RawOutcome<T, E>,
    op: F,
) -> RawOutcome<U, E> {
    match r {
        RawOutcome::Ok(value) => op(value),
        RawOutcome::Err(error) => RawOutcome::Err(error),
    }
}

/// Returns `r` if it is `Ok`, otherwise `other` (eager).
#[inline]
pub fn or<T, E, F>(r: RawOutcome<T, E>, other: RawOutcome<T, F>) -> RawOutcome<T, F> {
    match r {
        RawOutcome::Ok(value) => RawOutcome::Ok(value),
        RawOutcome::Err(_) => other,
    }
}

/// Returns `r` if it is `Ok`, otherwise calls `op` with the error (lazy).
#[inline]
pub fn or_else<T, E, F, O: FnOnce(E) -> RawOutcome<T, F>>(
    r: RawOutcome<T, E>,
    op: O,
) -> RawOutcome<T, F> {
    match r {
        RawOutcome::Ok(value) => RawOutcome::Ok(value),
        RawOutcome::Err(error) => op(error),
    }
}

/// The universal destructuring primitive: invokes exactly one of the two
/// handlers based on the tag and returns its result. Every other operation in
/// this module could be expressed atop `fold`.
#[inline]
pub fn fold<T, E, U, S: FnOnce(T) -> U, F: FnOnce(E) -> U>(
    r: RawOutcome<T, E>,
    on_ok: S,
    on_err: F,
) -> U {
    match r {
        RawOutcome::Ok(value) => on_ok(value),
        RawOutcome::Err(error) => on_err(error),
    }
}
