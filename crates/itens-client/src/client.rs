//! The five CRUD operations against the itens API.

use reqwest::header::LOCATION;
use reqwest::StatusCode;

use crate::error::ApiError;
use crate::models::{Item, ItemDraft};

/// Asynchronous client for the itens REST API.
///
/// Holds the API base URL (trailing slash stripped) and a reqwest client.
/// Every operation is a single attempt; a late caller retry means a whole
/// new call.
#[derive(Debug, Clone)]
pub struct ItensClient {
    base_url: String,
    http: reqwest::Client,
}

impl ItensClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET the full collection.
    ///
    /// The body is decoded as a JSON array without inspecting the status;
    /// a non-2xx body fails decoding and surfaces as [`ApiError::Transport`].
    pub async fn list_all(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.url("/itens");
        log::debug!("GET {url}");
        let itens = self.http.get(&url).send().await?.json().await?;
        Ok(itens)
    }

    /// GET a single item by id. Succeeds only on HTTP 200.
    pub async fn read(&self, id: u32) -> Result<Item, ApiError> {
        let url = self.url(&format!("/itens/{id}"));
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            log::warn!("GET {url} answered {}", resp.status());
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    /// POST a new item, then follow the returned `Location` to fetch the
    /// created resource. The header value is a path relative to the API
    /// root (e.g. `/itens/5`) and is appended to the base URL. The two
    /// calls are sequential; the GET only starts after the POST succeeds.
    pub async fn create(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        let url = self.url("/itens");
        log::debug!("POST {url}");
        let resp = self.http.post(&url).json(draft).send().await?;
        if resp.status() != StatusCode::CREATED {
            log::warn!("POST {url} answered {}", resp.status());
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(ApiError::MissingLocation)?;

        let url = self.url(&location);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        if resp.status() != StatusCode::OK {
            log::warn!("GET {url} answered {}", resp.status());
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    /// PUT the full item under its id. Succeeds only on HTTP 204.
    pub async fn update(&self, item: &Item) -> Result<(), ApiError> {
        let url = self.url(&format!("/itens/{}", item.id));
        log::debug!("PUT {url}");
        let resp = self.http.put(&url).json(item).send().await?;
        if resp.status() != StatusCode::NO_CONTENT {
            log::warn!("PUT {url} answered {}", resp.status());
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        Ok(())
    }

    /// DELETE by id. Succeeds only on HTTP 204.
    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let url = self.url(&format!("/itens/{id}"));
        log::debug!("DELETE {url}");
        let resp = self.http.delete(&url).send().await?;
        if resp.status() != StatusCode::NO_CONTENT {
            log::warn!("DELETE {url} answered {}", resp.status());
            return Err(ApiError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = ItensClient::new("http://localhost:4000/api/");
        assert_eq!(client.url("/itens"), "http://localhost:4000/api/itens");
    }

    #[test]
    fn test_location_is_joined_onto_base() {
        let client = ItensClient::new("http://localhost:4000/api");
        assert_eq!(client.url("/itens/5"), "http://localhost:4000/api/itens/5");
    }
}
