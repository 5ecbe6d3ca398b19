//! Conversions between [`Outcome`] and the other ways a fallible value is
//! commonly represented.

use crate::{Either, Outcome};

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}

/// Adapts a function returning a `(value, failure)` pair.
///
/// ```rust
/// use outcome_of::Outcome;
///
/// fn legacy(input: &str) -> (u8, Option<String>) {
///     match input.parse() {
///         Ok(n) => (n, None),
///         Err(e) => (0, Some(format!("{e}"))),
///     }
/// }
///
/// assert_eq!(Outcome::from(legacy("7")), Outcome::Ok(7));
/// assert!(Outcome::from(legacy("x")).is_err());
/// ```
impl<T, E> From<(T, Option<E>)> for Outcome<T, E> {
    fn from((value, failure): (T, Option<E>)) -> Self {
        Outcome::from_pair(value, failure)
    }
}

impl<T, E> From<Outcome<T, E>> for Either<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.unwrap()
    }
}
