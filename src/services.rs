//! Frontend bindings to the itens REST API.
//!
//! Thin async wrappers pinning [`ItensClient`] to the base URL the app is
//! deployed against. Pages call these and fold any error into their state
//! machine's error state.

use itens_client::{ApiError, Item, ItemDraft, ItensClient};

/// Base URL of the consumed REST API.
const API_BASE_URL: &str = "http://localhost:4000/api";

fn client() -> ItensClient {
    ItensClient::new(API_BASE_URL)
}

pub async fn list_all() -> Result<Vec<Item>, ApiError> {
    client().list_all().await
}

pub async fn read(id: u32) -> Result<Item, ApiError> {
    client().read(id).await
}

pub async fn create(draft: &ItemDraft) -> Result<Item, ApiError> {
    client().create(draft).await
}

pub async fn update(item: &Item) -> Result<(), ApiError> {
    client().update(item).await
}

pub async fn remove(id: u32) -> Result<(), ApiError> {
    client().delete(id).await
}
