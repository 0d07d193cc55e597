//! Configuration options for interpolation.
//!
//! - [`Options`]: per-call configuration, builder style.
//! - [`Delimiters`]: the open/close pair that marks placeholder boundaries.
//!
//! ## Examples
//!
//! ```rust
//! use ::interpolate::{context, interpolate_with_options, Delimiters, Options, Value};
//!
//! let options = Options::new().with_delimiters(Delimiters::literal("[", "]"));
//! let result = interpolate_with_options(
//!     "My age is [age]",
//!     &context! { "age": 21 },
//!     &options,
//! ).unwrap();
//! assert_eq!(result, Value::from("My age is 21"));
//! ```

/// The open/close marker pair bounding placeholder tokens.
///
/// Internally a pair of regex fragments. [`Delimiters::literal`] escapes its
/// arguments so any plain text works as a marker; [`Delimiters::pattern`]
/// passes fragments through verbatim for callers that already speak regex
/// (e.g. `\[` / `\]`). The default pair is `{{` / `}}`.
///
/// # Examples
///
/// ```rust
/// use ::interpolate::Delimiters;
///
/// let brackets = Delimiters::literal("[", "]");
/// let raw = Delimiters::pattern(r"\[", r"\]");
/// assert_eq!(brackets, raw);
/// assert_eq!(Delimiters::default(), Delimiters::literal("{{", "}}"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Delimiters {
    /// Creates a delimiter pair from plain text markers.
    ///
    /// The markers are regex-escaped, so characters like `[` or `$` are safe.
    #[must_use]
    pub fn literal(open: &str, close: &str) -> Self {
        Delimiters {
            open: regex::escape(open),
            close: regex::escape(close),
        }
    }

    /// Creates a delimiter pair from raw regex fragments.
    ///
    /// The fragments are compiled as given. An invalid fragment surfaces as
    /// [`crate::Error::Pattern`] when interpolation compiles the token
    /// matcher.
    #[must_use]
    pub fn pattern(open: impl Into<String>, close: impl Into<String>) -> Self {
        Delimiters {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The opening fragment.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing fragment.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::literal("{{", "}}")
    }
}

/// Per-call interpolation configuration.
///
/// Delimiters affect token recognition only; resolution and rendering are
/// identical under any marker pair.
///
/// # Examples
///
/// ```rust
/// use ::interpolate::{Delimiters, Options};
///
/// let options = Options::new().with_delimiters(Delimiters::literal("<%", "%>"));
/// assert_eq!(options.delimiters.open(), "<%");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub delimiters: Delimiters,
}

impl Options {
    /// Creates default options (`{{` / `}}` delimiters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter pair.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }
}
