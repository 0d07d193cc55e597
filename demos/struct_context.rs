//! Building a context from application structs via serde.
//!
//! Run with: cargo run --example struct_context

use ::interpolate::{interpolate, to_context};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Server {
    host: String,
    port: u16,
    tls: bool,
}

#[derive(Serialize)]
struct Config {
    server: Server,
    environment: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        server: Server {
            host: "localhost".to_string(),
            port: 8443,
            tls: true,
        },
        environment: "staging".to_string(),
    };

    let ctx = to_context(&config)?;

    let url = interpolate("https://{{server.host}}:{{server.port}}", &ctx)?;
    println!("url: {}", url);

    let summary = interpolate("[{{environment}}] server = {{server}}", &ctx)?;
    println!("{}", summary);

    Ok(())
}
