//! A success-or-failure container with a fluent combinator API.
//!
//! [`Outcome`] holds either an `Ok` payload or an `Err` payload. Its
//! combinators let a chain of fallible steps be written without checking for
//! failure after every step: a failure flows past every success-only step
//! untouched, and the first failure wins.
//!
//! ```rust
//! use outcome_of::{err, wrap, Error, Outcome};
//!
//! let out: Outcome<i32, Error> = wrap(1i32)
//!     .map(|i| i + 1)
//!     .and_then(|_| err(Error::msg("boom")))
//!     .wrap_err("ctx");
//!
//! assert_eq!(out.err().map(|e| e.to_string()), Some("ctx: boom".into()));
//! ```
//!
//! Code that still returns `(value, Option<failure>)` pairs, or plain
//! [`Result`]s, converts losslessly in both directions.
//!
//! ## Features
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`].
//! - `tracing`: trace-level events when failures are wrapped or recovered.

mod classify;
mod outcome;
mod pair;

pub use classify::Classify;
pub use either_of::Either;
pub use outcome::Outcome;
pub use outcome_error::Error;

/// Builds a successful [`Outcome`].
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Builds a failed [`Outcome`].
pub fn err<T, E>(err: E) -> Outcome<T, E> {
    Outcome::Err(err)
}

/// Builds an [`Outcome`] from a single value, classifying it with
/// [`Classify`].
pub fn wrap<T, E>(value: impl Classify<T, E>) -> Outcome<T, E> {
    Outcome::wrap(value)
}
