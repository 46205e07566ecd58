//! Fetch Orchestrator
//!
//! Cache-or-fetch for every catalog resource. A lookup first tries the
//! cache; on a miss it GETs the resource, decodes it, and stores the
//! re-serialized decode under the resource URL so hits and misses see the
//! same shape. A hit is a pure read and does not touch the entry's age.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::client::CatalogClient;
use crate::error::{PayloadOrigin, PokedexError, Result};
use crate::models::{Creature, LocationArea, LocationPage};
use crate::session::{PageDirection, PaginationCursor};

/// A catalog resource that can be cached by URL.
pub trait CatalogResource: Serialize + DeserializeOwned {
    /// Rejects decoded values that are structurally valid but unusable.
    fn validate(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

impl CatalogResource for LocationPage {
    fn validate(&self, url: &str) -> Result<()> {
        if self.results.is_empty() {
            return Err(PokedexError::EmptyResult(format!("location page {url}")));
        }
        Ok(())
    }
}

impl CatalogResource for LocationArea {
    fn validate(&self, url: &str) -> Result<()> {
        if self.pokemon_encounters.is_empty() {
            return Err(PokedexError::EmptyResult(format!("encounter list {url}")));
        }
        Ok(())
    }
}

impl CatalogResource for Creature {}

// == Fetcher ==
/// Cache-backed access to the catalog.
#[derive(Debug, Clone)]
pub struct Fetcher {
    cache: ExpiringCache,
    client: CatalogClient,
}

impl Fetcher {
    // == Constructor ==
    /// Pairs the shared cache with a catalog client.
    pub fn new(cache: ExpiringCache, client: CatalogClient) -> Self {
        Self { cache, client }
    }

    /// Shared response cache.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Catalog client, used for URL layout.
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    // == Generic Lookup ==
    /// Returns the resource at `url`, from the cache when present.
    ///
    /// # Errors
    /// * `Decode` if the cached or downloaded bytes don't fit `T`
    /// * `EmptyResult` if `T::validate` rejects the decode
    /// * `Transport` / `HttpStatus` if the network fetch fails
    pub async fn fetch<T: CatalogResource>(&self, url: &str) -> Result<T> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url, "serving from cache");
            let value: T = decode(url, &bytes, PayloadOrigin::Cache)?;
            value.validate(url)?;
            return Ok(value);
        }

        let body = self.client.get_bytes(url).await?;
        let value: T = decode(url, &body, PayloadOrigin::Network)?;
        value.validate(url)?;

        let canonical = serde_json::to_vec(&value).map_err(|source| PokedexError::Encode {
            url: url.to_string(),
            source,
        })?;
        self.cache.add(url, canonical).await;

        Ok(value)
    }

    // == Location Pages ==
    /// Fetches one page of the location listing and moves `cursor` to it.
    ///
    /// The cursor is only updated once the page has decoded successfully.
    pub async fn walk_locations(
        &self,
        cursor: &mut PaginationCursor,
        direction: PageDirection,
    ) -> Result<LocationPage> {
        let first_page = self.client.first_page_url();
        let url = cursor.target(direction, &first_page);

        let page: LocationPage = self.fetch(&url).await?;
        cursor.advance(&page, &first_page);

        Ok(page)
    }

    // == Location Area ==
    /// Fetches one area's encounters. An area with none is `EmptyResult`.
    pub async fn fetch_location_area(&self, area: &str) -> Result<LocationArea> {
        self.fetch(&self.client.location_area_url(area)).await
    }

    // == Creature ==
    /// Fetches a creature by name or ID. A 404 means the catalog doesn't
    /// know it and is reported as `NotFound`.
    pub async fn fetch_creature(&self, name_or_id: &str) -> Result<Creature> {
        let url = self.client.creature_url(name_or_id);
        match self.fetch(&url).await {
            Err(PokedexError::HttpStatus { status, .. })
                if status == reqwest::StatusCode::NOT_FOUND =>
            {
                Err(PokedexError::NotFound(name_or_id.to_string()))
            }
            other => other,
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8], origin: PayloadOrigin) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| PokedexError::Decode {
        url: url.to_string(),
        origin,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::NamedResource;

    // Nothing listens here, so any test that reaches the network fails loudly
    fn offline_fetcher() -> Fetcher {
        Fetcher::new(
            ExpiringCache::new(Duration::from_secs(60)),
            CatalogClient::new("http://127.0.0.1:9"),
        )
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let fetcher = offline_fetcher();
        let url = fetcher.client().creature_url("pidgey");
        let pidgey = Creature {
            name: "pidgey".into(),
            base_experience: 50,
            ..Creature::default()
        };
        fetcher
            .cache()
            .add(url.clone(), serde_json::to_vec(&pidgey).unwrap())
            .await;

        let fetched = fetcher.fetch_creature("pidgey").await.unwrap();
        assert_eq!(fetched, pidgey);
    }

    #[tokio::test]
    async fn test_cache_hit_does_not_reinsert() {
        let fetcher = offline_fetcher();
        let url = fetcher.client().creature_url("abra");
        let abra = Creature {
            name: "abra".into(),
            ..Creature::default()
        };
        fetcher
            .cache()
            .add(url, serde_json::to_vec(&abra).unwrap())
            .await;

        fetcher.fetch_creature("abra").await.unwrap();
        fetcher.fetch_creature("abra").await.unwrap();

        let stats = fetcher.cache().stats().await;
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.hits, 2);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_decode_error() {
        let fetcher = offline_fetcher();
        let url = fetcher.client().location_area_url("eterna-city-area");
        fetcher.cache().add(url, b"{not json".to_vec()).await;

        let result = fetcher.fetch_location_area("eterna-city-area").await;
        assert!(matches!(
            result,
            Err(PokedexError::Decode {
                origin: PayloadOrigin::Cache,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_cached_empty_page_is_empty_result() {
        let fetcher = offline_fetcher();
        let url = fetcher.client().first_page_url();
        let empty = LocationPage::default();
        fetcher
            .cache()
            .add(url, serde_json::to_vec(&empty).unwrap())
            .await;

        let mut cursor = PaginationCursor::new();
        let result = fetcher
            .walk_locations(&mut cursor, PageDirection::Forward)
            .await;

        assert!(matches!(result, Err(PokedexError::EmptyResult(_))));
        assert_eq!(cursor, PaginationCursor::new(), "cursor untouched on error");
    }

    #[tokio::test]
    async fn test_walk_from_cache_updates_cursor() {
        let fetcher = offline_fetcher();
        let first = fetcher.client().first_page_url();
        let page = LocationPage {
            count: 40,
            next: Some(format!("{first}?offset=20&limit=20")),
            previous: None,
            results: vec![NamedResource::new("canalave-city-area", "")],
        };
        fetcher
            .cache()
            .add(first.clone(), serde_json::to_vec(&page).unwrap())
            .await;

        let mut cursor = PaginationCursor::new();
        let fetched = fetcher
            .walk_locations(&mut cursor, PageDirection::Backward)
            .await
            .unwrap();

        assert_eq!(fetched, page);
        assert_eq!(cursor.next, format!("{first}?offset=20&limit=20"));
        assert_eq!(cursor.previous, "");
    }

    #[tokio::test]
    async fn test_miss_with_unreachable_catalog_is_transport_error() {
        let fetcher = offline_fetcher();

        let result = fetcher.fetch_creature("pidgey").await;
        assert!(matches!(result, Err(PokedexError::Transport(_))));
        assert_eq!(fetcher.cache().len().await, 0);
    }
}
