//! A shared failure value that any [`std::error::Error`] converts into.
//!
//! [`Error`] is cheap to clone, can be built from a plain message, and can be
//! wrapped with additional context. Wrapping keeps the original failure
//! reachable through [`std::error::Error::source`], so the whole chain of
//! causes can be walked with [`Error::chain`].
//!
//! ```rust
//! use outcome_error::Error;
//!
//! let err = Error::msg("connection reset").wrap("fetching user");
//! assert_eq!(err.to_string(), "fetching user: connection reset");
//!
//! let causes = err.chain().map(|e| e.to_string()).collect::<Vec<_>>();
//! assert_eq!(causes.len(), 2);
//! assert_eq!(causes[1], "connection reset");
//! ```

#![deny(missing_docs)]

use std::{error, fmt, ops, sync::Arc};

/// This is a result type into which any error can be converted.
///
/// Results are stored as [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

type Inner = Arc<dyn error::Error + Send + Sync>;

/// A generic wrapper for any error.
///
/// Two `Error`s are equal only if they share the same underlying allocation,
/// i.e. one is a clone of the other.
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Error(Inner);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

#[derive(Debug)]
struct Wrapped {
    context: String,
    source: Inner,
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl error::Error for Wrapped {
    // hand out the inner error itself, not the `Arc`, so it can be downcast
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl Error {
    /// Creates an error from anything that can be displayed.
    pub fn msg(message: impl fmt::Display) -> Self {
        Error(Arc::new(Message(message.to_string())))
    }

    /// Adopts an already boxed error.
    pub fn from_boxed(err: Box<dyn error::Error + Send + Sync>) -> Self {
        Error(Arc::from(err))
    }

    /// Wraps this error in a new one described as `"<context>: <self>"`.
    ///
    /// The wrapped error stays available as the [`source`](error::Error::source)
    /// of the new one.
    pub fn wrap(self, context: impl fmt::Display) -> Self {
        Error(Arc::new(Wrapped {
            context: context.to_string(),
            source: self.0,
        }))
    }

    /// Iterates over this error and each of its sources, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(&*self.0),
        }
    }

    /// Returns the innermost error in the chain of sources.
    pub fn root_cause(&self) -> &(dyn error::Error + 'static) {
        // the chain always yields at least `self`
        self.chain().last().unwrap_or(&*self.0)
    }

    /// Returns the outermost error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: error::Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Converts the wrapper into the inner reference-counted error.
    pub fn into_inner(self) -> Arc<dyn error::Error + Send + Sync> {
        self.0
    }
}

impl ops::Deref for Error {
    type Target = Arc<dyn error::Error + Send + Sync>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> From<T> for Error
where
    T: error::Error + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Error(Arc::new(value))
    }
}

/// Iterator over an [`Error`] and its sources, returned by [`Error::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn error::Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
