//! Swapping the placeholder markers per call.
//!
//! Run with: cargo run --example custom_delimiters

use ::interpolate::{context, interpolate_with_options, Delimiters, Options};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let ctx = context! { "age": 21, "city": "Lisbon" };

    // Plain-text markers are escaped automatically.
    let brackets = Options::new().with_delimiters(Delimiters::literal("[", "]"));
    println!(
        "{}",
        interpolate_with_options("My age is [age]", &ctx, &brackets)?
    );

    // Raw regex fragments work too, for callers that already have them.
    let erb = Options::new().with_delimiters(Delimiters::pattern("<%", "%>"));
    println!(
        "{}",
        interpolate_with_options("I live in <%city%>", &ctx, &erb)?
    );

    Ok(())
}
