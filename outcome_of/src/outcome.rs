use crate::{Classify, Either};
use core::fmt::{self, Display};
use outcome_error::Error;

/// The outcome of an operation that either succeeded with a `T` or failed
/// with an `E`.
///
/// Every combinator consumes the `Outcome` and returns a new one, so a
/// pipeline of fallible steps reads top to bottom without a branch after each
/// step. A failure passes through every step that only cares about success,
/// untouched and without invoking the step.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation succeeded.
    Ok(T),
    /// The operation failed.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Builds an `Outcome` from a single value, deciding from the value
    /// itself whether it is a success or a failure.
    ///
    /// See [`Classify`] for which values count as failures.
    pub fn wrap(value: impl Classify<T, E>) -> Self {
        value.classify()
    }

    /// Builds an `Outcome` from a conventional `(value, failure)` pair.
    ///
    /// If a failure is present the value is dropped.
    pub fn from_pair(value: T, failure: Option<E>) -> Self {
        match failure {
            None => Outcome::Ok(value),
            Some(err) => Outcome::Err(err),
        }
    }

    /// Splits the `Outcome` into a `(value, failure)` pair. Exactly one side
    /// is `Some`.
    pub fn into_pair(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Ok(value) => (Some(value), None),
            Outcome::Err(err) => (None, Some(err)),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns the success payload, if there is one.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Returns the failure payload, if there is one.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(err) => Some(err),
        }
    }

    /// Returns whichever payload is held, without panicking.
    ///
    /// ```rust
    /// use outcome_of::{err, Either, Outcome};
    ///
    /// let failed: Outcome<i32, &str> = err("nope");
    /// assert_eq!(failed.unwrap(), Either::Right("nope"));
    /// ```
    pub fn unwrap(self) -> Either<T, E> {
        match self {
            Outcome::Ok(value) => Either::Left(value),
            Outcome::Err(err) => Either::Right(err),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Transforms the success payload. A failure is passed through and `f`
    /// is never called.
    ///
    /// The transform has to accept exactly the success payload type:
    ///
    /// ```compile_fail
    /// use outcome_of::{ok, Outcome};
    ///
    /// let number: Outcome<i32, ()> = ok(1);
    /// let _ = number.map(|s: String| s.len());
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Transforms the failure payload. A success is passed through and `f`
    /// is never called.
    pub fn map_err<E1, F>(self, f: F) -> Outcome<T, E1>
    where
        F: FnOnce(E) -> E1,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Wraps a failure in a new [`Error`] described as
    /// `"<message>: <failure>"`. The original failure remains reachable as the
    /// new error's source.
    ///
    /// ```rust
    /// use outcome_of::{err, Error, Outcome};
    ///
    /// let failed: Outcome<(), Error> = err(Error::msg("inner"));
    /// let wrapped = failed.wrap_err("outer").err().unwrap();
    /// assert_eq!(wrapped.to_string(), "outer: inner");
    /// ```
    pub fn wrap_err(self, message: impl Display) -> Outcome<T, Error>
    where
        E: Into<Error>,
    {
        self.map_err(|err| {
            let err: Error = err.into();
            #[cfg(feature = "tracing")]
            tracing::trace!(context = %message, failure = %err, "wrapping failure");
            err.wrap(message)
        })
    }

    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(err) = &self {
            f(err);
        }
        self
    }

    /// Feeds the success payload into the next fallible step. A failure
    /// short-circuits and `f` is never called.
    ///
    /// The step has to return an `Outcome` with the same failure type:
    ///
    /// ```compile_fail
    /// use outcome_of::{ok, Outcome};
    ///
    /// let number: Outcome<i32, ()> = ok(1);
    /// let _ = number.and_then(|i| i + 1);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Returns `other` if this is a success, otherwise passes the failure
    /// through.
    ///
    /// `other` is built before the call either way; use
    /// [`and_with`](Self::and_with) to build it only when it is needed.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Like [`and`](Self::and), but only builds the other `Outcome` on
    /// success.
    pub fn and_with<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(_) => f(),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Returns `other` if this is a failure, otherwise passes the success
    /// through.
    ///
    /// `other` is built before the call either way; use
    /// [`or_with`](Self::or_with) to build it only when it is needed.
    pub fn or<E1>(self, other: Outcome<T, E1>) -> Outcome<T, E1> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// Like [`or`](Self::or), but only builds the other `Outcome` on failure.
    pub fn or_with<E1, F>(self, f: F) -> Outcome<T, E1>
    where
        F: FnOnce() -> Outcome<T, E1>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => f(),
        }
    }

    /// Hands the failure to a recovery step. A success short-circuits and `f`
    /// is never called.
    pub fn or_else<E1, F>(self, f: F) -> Outcome<T, E1>
    where
        F: FnOnce(E) -> Outcome<T, E1>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("recovering from failure");
                f(err)
            }
        }
    }

    /// Converts into a [`core::result::Result`], e.g. to use `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Display for Outcome<T, E>
where
    T: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => value.fmt(f),
            Outcome::Err(err) => err.fmt(f),
        }
    }
}
