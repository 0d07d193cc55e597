//! Error types for template interpolation.
//!
//! Interpolation has one domain failure: a placeholder path that cannot be
//! fully resolved against the context. Everything else in this module exists
//! to support the ambient machinery (delimiter pattern compilation and the
//! serde bridge used by [`crate::to_context`]).
//!
//! ## Examples
//!
//! ```rust
//! use ::interpolate::{interpolate, context, Error};
//!
//! let err = interpolate("{{foo.bar.baz}}", &context! {}).unwrap_err();
//! match err {
//!     Error::MissingVariable { path } => assert_eq!(path, "foo.bar.baz"),
//!     other => panic!("unexpected error: {}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// All errors that can occur during interpolation or context construction.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A placeholder's dotted path did not resolve to a defined, non-null
    /// value. `path` is the full original dotted path of the token, not just
    /// the segment that was missing.
    #[error("Missing variable {path}")]
    MissingVariable { path: String },

    /// A caller-supplied delimiter fragment was not a valid regular
    /// expression.
    #[error("invalid delimiter pattern: {0}")]
    Pattern(String),

    /// Custom error carrier, used by the serde bridge.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a resolution-failure error for the given dotted path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ::interpolate::Error;
    ///
    /// let err = Error::missing_variable("person.email");
    /// assert_eq!(err.to_string(), "Missing variable person.email");
    /// ```
    pub fn missing_variable(path: impl Into<String>) -> Self {
        Error::MissingVariable { path: path.into() }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
