//! Basic placeholder substitution and type preservation.
//!
//! Run with: cargo run --example simple

use ::interpolate::{context, interpolate};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let ctx = context! {
        "name": "Alice Johnson",
        "age": 30,
        "person": {
            "name": "Alice Johnson",
            "email": "alice@example.com"
        }
    };

    // Tokens inside text substitute their string representation.
    let greeting = interpolate("Hello {{name}}, you are {{age}}", &ctx)?;
    println!("{}", greeting);

    // A whole-template token returns the raw value, type preserved.
    let person = interpolate("{{person}}", &ctx)?;
    println!("person is an object: {}", person.is_object());

    // The string: cast forces compact JSON instead.
    let json = interpolate("{{string:person}}", &ctx)?;
    println!("person as JSON: {}", json);

    Ok(())
}
