//! Outcome Core: success-or-failure values with a dual API surface
//!
//! This crate provides a disjoint-union result value — either a success
//! carrying a payload or a failure carrying an error payload — together with
//! a complete combinator algebra for inspecting, transforming, chaining, and
//! safely extracting that value.
//!
//! Key design principles:
//! - `RawOutcome`: the plain tagged value with no behavior attached
//! - `ops`: free functions implementing every operation's semantics once
//! - `Outcome`: a method-chaining facade whose methods are thin wrappers over
//!   `ops` through a lossless bridge, so the two surfaces cannot drift
//!
//! # Modules
//!
//! - `raw`: the two-variant tagged value and its constructors
//! - `ops`: the functional combinator set (the canonical semantics)
//! - `outcome`: the object-style facade and the conversion bridge
//! - `serialize`: the facade's structured wire shape (requires `serde`)
//!
//! # Two wire shapes
//!
//! The tagged value and the facade serialize differently, by design:
//!
//! ```text
//! RawOutcome:  {"tag": "ok",  "inner": 5}   /  {"tag": "err",  "inner": "boom"}
//! Outcome:     {"kind": "ok", "value": 5}   /  {"kind": "err", "error": "boom"}
//! ```
//!
//! Consumers may depend on either shape; the two are not interchangeable and
//! are both pinned by tests.

pub mod ops;
pub mod outcome;
pub mod raw;

#[cfg(feature = "serde")]
mod serialize;

// Re-export key types and constructors
pub use outcome::Outcome;
pub use raw::{RawOutcome, failure, success};

// Functional combinator set
pub use ops::{
    and, and_then, err, expect, expect_err, fold, inspect, inspect_err, is_err, is_err_and,
    is_ok, is_ok_and, map, map_err, map_or, map_or_else, ok, or, or_else, unwrap, unwrap_err,
    unwrap_or, unwrap_or_else,
};
