use crate::Outcome;
use outcome_error::Error;
use std::{
    char::ParseCharError,
    error, fmt, io,
    net::AddrParseError,
    num::{ParseFloatError, ParseIntError, TryFromIntError},
    str::{ParseBoolError, Utf8Error},
    string::FromUtf8Error,
};

/// Values that know whether they represent a success or a failure.
///
/// This backs [`Outcome::wrap`], which builds an `Outcome` from a single
/// value at the boundary with code that does not use `Outcome` yet:
/// - the shared [`Error`] is always a failure;
/// - the common std errors ([`io::Error`], the `Parse*Error`s, [`Utf8Error`],
///   [`FromUtf8Error`], [`TryFromIntError`], [`AddrParseError`],
///   [`fmt::Error`]) and `Box<dyn Error + Send + Sync>` are failures, either
///   converted into the shared [`Error`] or kept as their own type;
/// - a [`Result`] keeps its own classification;
/// - plain values (scalars, strings, vectors, `()`, and [`Option`]s,
///   including `None`) are always a success, whatever the failure type.
///
/// ```rust
/// use outcome_of::{wrap, Error, Outcome};
///
/// let value: Outcome<i32, Error> = wrap(7);
/// assert_eq!(value.ok(), Some(7));
///
/// let failure: Outcome<i32, Error> = wrap(Error::msg("boom"));
/// assert!(failure.is_err());
///
/// let nothing: Outcome<Option<u8>, Error> = wrap(None);
/// assert!(nothing.is_ok());
///
/// let io: Outcome<i32, Error> = wrap(std::io::Error::other("disk"));
/// assert!(io.is_err());
/// ```
///
/// Error types defined outside std are not classified automatically; they
/// can implement `Classify` themselves, or be converted with
/// [`Error::from`] first.
pub trait Classify<T, E> {
    /// Sorts `self` into the matching variant.
    fn classify(self) -> Outcome<T, E>;
}

impl<T, E> Classify<T, E> for Outcome<T, E> {
    fn classify(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> Classify<T, E> for Result<T, E> {
    fn classify(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T> Classify<T, Error> for Error {
    fn classify(self) -> Outcome<T, Error> {
        Outcome::Err(self)
    }
}

impl<T> Classify<T, Error> for Box<dyn error::Error + Send + Sync> {
    fn classify(self) -> Outcome<T, Error> {
        Outcome::Err(Error::from_boxed(self))
    }
}

impl<T> Classify<T, Box<dyn error::Error + Send + Sync>>
    for Box<dyn error::Error + Send + Sync>
{
    fn classify(self) -> Outcome<T, Box<dyn error::Error + Send + Sync>> {
        Outcome::Err(self)
    }
}

macro_rules! failures {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T> Classify<T, Error> for $ty {
                fn classify(self) -> Outcome<T, Error> {
                    Outcome::Err(Error::from(self))
                }
            }

            impl<T> Classify<T, $ty> for $ty {
                fn classify(self) -> Outcome<T, $ty> {
                    Outcome::Err(self)
                }
            }
        )+
    };
}

failures!(
    io::Error,
    fmt::Error,
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    ParseCharError,
    TryFromIntError,
    Utf8Error,
    FromUtf8Error,
    AddrParseError,
);

macro_rules! plain_values {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<E> Classify<$ty, E> for $ty {
                fn classify(self) -> Outcome<$ty, E> {
                    Outcome::Ok(self)
                }
            }
        )+
    };
}

plain_values!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

impl<'a, E> Classify<&'a str, E> for &'a str {
    fn classify(self) -> Outcome<&'a str, E> {
        Outcome::Ok(self)
    }
}

impl<U, E> Classify<Vec<U>, E> for Vec<U> {
    fn classify(self) -> Outcome<Vec<U>, E> {
        Outcome::Ok(self)
    }
}

impl<U, E> Classify<Option<U>, E> for Option<U> {
    fn classify(self) -> Outcome<Option<U>, E> {
        Outcome::Ok(self)
    }
}
