use wasm_bindgen::prelude::*;

// Export the logging macros crate-wide
#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod pages;
pub mod router;
pub mod routes;

pub use error::{LoadError, RouterError};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    app::start()
}
