//! # interpolate
//!
//! A template-string interpolation engine: scan a template for delimited
//! placeholder tokens, resolve each token's dotted path against a data
//! context, and assemble the result.
//!
//! ## Key behaviors
//!
//! - **Type-preserving**: a template that is exactly one token returns the
//!   raw context value, whatever its type
//! - **Dotted paths**: `{{person.address.city}}` walks nested objects
//! - **String casting**: a `string:` prefix forces string rendering
//!   (`{{string:person}}` yields compact JSON for an object)
//! - **Configurable delimiters**: any marker pair works, `{{` / `}}` by
//!   default
//! - **Precise failures**: an unresolved path reports the full dotted path
//!   it was asked for
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! interpolate = "0.1"
//! ```
//!
//! ### Substituting into text
//!
//! ```rust
//! use ::interpolate::{context, interpolate, Value};
//!
//! let ctx = context! {
//!     "name": "Alice",
//!     "age": 30
//! };
//!
//! let result = interpolate("{{name}} is {{age}} years old", &ctx).unwrap();
//! assert_eq!(result, Value::from("Alice is 30 years old"));
//! ```
//!
//! ### Preserving value types
//!
//! When the whole template is a single placeholder, the looked-up value comes
//! back as-is:
//!
//! ```rust
//! use ::interpolate::{context, interpolate};
//!
//! let ctx = context! {
//!     "person": { "name": "John Doe", "email": "johndoe@example.com" }
//! };
//!
//! let person = interpolate("{{person}}", &ctx).unwrap();
//! assert!(person.is_object());
//!
//! // ...unless a cast forces the string rendering:
//! let json = interpolate("{{string:person}}", &ctx).unwrap();
//! assert_eq!(
//!     json.as_str(),
//!     Some(r#"{"name":"John Doe","email":"johndoe@example.com"}"#),
//! );
//! ```
//!
//! ### Custom delimiters
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
//!
//! ### Contexts from your own types
//!
//! ```rust
//! use ::interpolate::{interpolate, to_context, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Greeting { name: String }
//!
//! let ctx = to_context(&Greeting { name: "Bob".to_string() }).unwrap();
//! let result = interpolate("Hello {{name}}", &ctx).unwrap();
//! assert_eq!(result, Value::from("Hello Bob"));
//! ```
//!
//! ## Errors
//!
//! Resolution failure is the single domain error: any missing key, null
//! value, or scalar in an intermediate position makes the token's full
//! dotted path unresolvable and interpolation aborts with
//! [`Error::MissingVariable`] for the first such token in scan order.
//!
//! ## Scope
//!
//! This is deliberately not a template language: no loops, no conditionals,
//! no filter pipeline. File loading, configuration parsing, and
//! document-level templating belong to callers.

pub mod error;
pub mod interpolate;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use interpolate::{interpolate, interpolate_with_options};
pub use map::Map;
pub use options::{Delimiters, Options};
pub use ser::{to_context, to_value, ValueSerializer};
pub use value::{Number, Value};
