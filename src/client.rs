//! Catalog HTTP client
//!
//! Thin wrapper over `reqwest` that knows the catalog's URL layout and turns
//! non-2xx responses into errors.

use reqwest::Client;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// Client for the remote catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    // == Constructor ==
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // == URLs ==
    /// Catalog root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// URL of one location area's detail, by name or ID.
    pub fn location_area_url(&self, area: &str) -> String {
        format!("{}/location-area/{}", self.base_url, area)
    }

    /// URL of one creature, by name or ID.
    pub fn creature_url(&self, name_or_id: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name_or_id)
    }

    // == Get ==
    /// GETs `url` and returns the body of a 2xx response.
    ///
    /// # Errors
    /// * `PokedexError::Transport` if the request could not be completed
    /// * `PokedexError::HttpStatus` for any non-2xx status
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "requesting catalog resource");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "catalog responded");
        Ok(body.to_vec())
    }
}
