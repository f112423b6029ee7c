//! Prints the OpenAPI document for the HTTP surface.
//!
//! Usage:
//!   cargo run --bin generate_openapi                 # stdout
//!   cargo run --bin generate_openapi openapi.json    # file

use std::{env, fs};

use smart_blinds_service::api::handlers::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .expect("OpenAPI spec should serialise");

    match env::args().nth(1) {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing to {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("OpenAPI spec written to {path}");
        }
        None => println!("{json}"),
    }
}
