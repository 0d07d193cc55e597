//! The interpolation engine: token scanning, path resolution, and output
//! assembly.
//!
//! A template is scanned left to right for placeholder tokens bounded by the
//! configured delimiters. Each token payload is a dotted path, optionally
//! prefixed with a cast (`string:` is the only recognized cast). Paths
//! resolve against the context by successive key lookups.
//!
//! Two output shapes exist:
//!
//! - If the template is exactly one token with no surrounding text, the
//!   resolved value is returned as-is, preserving its type. A `string:` cast
//!   forces the rendered string instead.
//! - Otherwise every token is replaced by its rendered representation and the
//!   result is a single [`Value::String`].
//!
//! ## Examples
//!
//! ```rust
//! use ::interpolate::{context, interpolate, Value};
//!
//! let ctx = context! { "person": { "name": "John Doe" } };
//!
//! // Whole-template token: the object comes back type-preserved.
//! let v = interpolate("{{person}}", &ctx).unwrap();
//! assert!(v.is_object());
//!
//! // Mixed text: tokens substitute their string representation.
//! let v = interpolate("Hello {{person.name}}!", &ctx).unwrap();
//! assert_eq!(v, Value::from("Hello John Doe!"));
//! ```

use regex::Regex;

use crate::{Error, Map, Options, Result, Value};

/// Top-level context key excluded from placeholder resolution. Paths rooted
/// here fail even when the key is present.
const RESERVED_ROOT: &str = "data";

/// A recognized type-cast prefix inside a token payload.
///
/// Closed enumeration: `string:` is the only cast today, and unknown
/// prefixes are treated as part of the path rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cast {
    String,
}

impl Cast {
    /// Splits an optional cast prefix off a token payload, returning the
    /// cast and the remaining dotted path.
    fn strip(payload: &str) -> (Option<Cast>, &str) {
        match payload.strip_prefix("string:") {
            Some(path) => (Some(Cast::String), path),
            None => (None, payload),
        }
    }
}

/// Interpolates `template` against `context` with default options
/// (`{{` / `}}` delimiters).
///
/// Returns the raw context value when the whole template is a single
/// uncast token, and a [`Value::String`] otherwise. A template with no
/// tokens comes back unchanged as a string.
///
/// # Examples
///
/// ```rust
/// use ::interpolate::{context, interpolate, Value};
///
/// let ctx = context! { "age": 21 };
/// assert_eq!(
///     interpolate("My age is {{age}}", &ctx).unwrap(),
///     Value::from("My age is 21"),
/// );
/// assert_eq!(interpolate("{{age}}", &ctx).unwrap(), Value::from(21));
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingVariable`] for the first token, in scan order,
/// whose dotted path does not resolve to a defined non-null value.
pub fn interpolate(template: &str, context: &Map) -> Result<Value> {
    interpolate_with_options(template, context, &Options::default())
}

/// Interpolates `template` against `context` with explicit [`Options`].
///
/// Delimiters affect token recognition only; resolution and rendering work
/// identically under any marker pair.
///
/// # Examples
///
/// ```rust
/// use ::interpolate::{context, interpolate_with_options, Delimiters, Options, Value};
///
/// let options = Options::new().with_delimiters(Delimiters::pattern(r"\[", r"\]"));
/// let result = interpolate_with_options("My age is [age]", &context! { "age": 21 }, &options);
/// assert_eq!(result.unwrap(), Value::from("My age is 21"));
/// ```
///
/// # Errors
///
/// [`Error::MissingVariable`] on the first unresolved token, or
/// [`Error::Pattern`] when a caller-supplied delimiter fragment does not
/// compile.
pub fn interpolate_with_options(template: &str, context: &Map, options: &Options) -> Result<Value> {
    let matcher = token_matcher(options)?;

    let mut tokens = Vec::new();
    for caps in matcher.captures_iter(template) {
        if let (Some(whole), Some(payload)) = (caps.get(0), caps.get(1)) {
            tokens.push((whole, payload.as_str()));
        }
    }

    // Whole-template shortcut: a single token with no surrounding text
    // returns the resolved value type-preserved, unless cast.
    if let [(whole, payload)] = tokens.as_slice() {
        if whole.start() == 0 && whole.end() == template.len() {
            let (cast, path) = Cast::strip(payload);
            let value = resolve(context, path)?;
            return Ok(match cast {
                Some(Cast::String) => Value::String(value.to_string()),
                None => value.clone(),
            });
        }
    }

    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;
    for (whole, payload) in tokens {
        // Casting is idempotent in text position: substitution already
        // renders every value to its string representation.
        let (_cast, path) = Cast::strip(payload);
        let value = resolve(context, path)?;
        output.push_str(&template[cursor..whole.start()]);
        output.push_str(&value.to_string());
        cursor = whole.end();
    }
    output.push_str(&template[cursor..]);
    Ok(Value::String(output))
}

/// Builds the token matcher for the configured delimiters.
///
/// The payload capture is `(.+?)`: non-greedy, at least one character, and
/// `.` excludes newlines. Consequences, both deliberate: an empty token
/// (`{{}}`) is not recognized and stays literal text, and a token never
/// spans lines.
fn token_matcher(options: &Options) -> Result<Regex> {
    let pattern = format!(
        "{}(.+?){}",
        options.delimiters.open(),
        options.delimiters.close()
    );
    Ok(Regex::new(&pattern)?)
}

/// Resolves a prefix-stripped dotted path, reporting the full path on
/// failure.
fn resolve<'a>(context: &'a Map, path: &str) -> Result<&'a Value> {
    if is_reserved(path) {
        return Err(Error::missing_variable(path));
    }
    context
        .lookup(path)
        .ok_or_else(|| Error::missing_variable(path))
}

fn is_reserved(path: &str) -> bool {
    path == RESERVED_ROOT
        || path
            .strip_prefix(RESERVED_ROOT)
            .is_some_and(|rest| rest.starts_with('.'))
}
