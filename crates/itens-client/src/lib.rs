//! REST client for the itens API.
//!
//! Builds on reqwest, so the same code runs fetch-backed in the browser
//! (wasm32) and hyper-backed in native test binaries. One HTTP round-trip
//! per operation, no retries; `create` is the one exception, chaining a
//! POST with a GET of the returned `Location`.

pub mod client;
pub mod error;
pub mod models;

pub use client::ItensClient;
pub use error::ApiError;
pub use models::{Item, ItemDraft};
