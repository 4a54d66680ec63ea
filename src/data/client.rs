//! Cache-aside client for the PokeAPI catalog
//!
//! Every operation follows the same sequence: look the request URL up in the
//! [`Cache`], decode on a hit, otherwise fetch, decode, and only then store the
//! raw body. A cached body that no longer decodes is dropped and refetched.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{
    AreaDetail, AreaList, ClientError, EntityDetail, EntityList, Fetch, FetchError, HttpFetcher,
};
use crate::cache::Cache;

/// Base URL for the PokeAPI v2 REST API
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for [`Client::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash (overridable for testing)
    pub base_url: String,
    /// Per-request timeout enforced by the fetcher
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Typed, cache-backed access to the catalog
///
/// The client holds no pagination state; callers keep their own cursors
/// (see [`Pagination`](super::Pagination)).
#[derive(Debug, Clone)]
pub struct Client<F = HttpFetcher> {
    cache: Cache,
    fetcher: F,
    base_url: String,
}

impl Client<HttpFetcher> {
    /// Creates a client that talks HTTP using `config`
    pub fn new(config: ClientConfig, cache: Cache) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self::with_fetcher(fetcher, config.base_url, cache))
    }
}

impl<F: Fetch> Client<F> {
    /// Creates a client over a custom transport
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>, cache: Cache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            cache,
            fetcher,
            base_url,
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of location areas
    pub fn area_list_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of the first page of entities
    pub fn entity_list_url(&self) -> String {
        format!("{}/pokemon/", self.base_url)
    }

    /// Fetches one page of location areas
    ///
    /// # Arguments
    /// * `cursor` - An absolute URL from a previous page, or `None` for the first page
    pub async fn get_area_list(&self, cursor: Option<&str>) -> Result<AreaList, ClientError> {
        let url = cursor.map_or_else(|| self.area_list_url(), str::to_string);
        self.fetch_cached("get_area_list", &url).await
    }

    /// Fetches one page of entities
    ///
    /// # Arguments
    /// * `cursor` - An absolute URL from a previous page, or `None` for the first page
    pub async fn get_entity_list(&self, cursor: Option<&str>) -> Result<EntityList, ClientError> {
        let url = cursor.map_or_else(|| self.entity_list_url(), str::to_string);
        self.fetch_cached("get_entity_list", &url).await
    }

    /// Fetches a location area and the entities encountered there
    ///
    /// Fails with `InvalidInput` before any request if `area` is empty or
    /// cannot be used as a path segment.
    pub async fn get_area_detail(&self, area: &str) -> Result<AreaDetail, ClientError> {
        const OPERATION: &str = "get_area_detail";
        let area = path_segment(OPERATION, area)?;
        let url = format!("{}/location-area/{}", self.base_url, area);
        self.fetch_cached(OPERATION, &url).await
    }

    /// Fetches a single entity by name or id
    ///
    /// Fails with `InvalidInput` before any request if `name` is empty or
    /// cannot be used as a path segment.
    pub async fn get_entity_detail(&self, name: &str) -> Result<EntityDetail, ClientError> {
        const OPERATION: &str = "get_entity_detail";
        let name = path_segment(OPERATION, name)?;
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_cached(OPERATION, &url).await
    }

    /// Cache-aside fetch of `url`, decoded as `T`
    async fn fetch_cached<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
    ) -> Result<T, ClientError> {
        if let Some(body) = self.cache.get(url) {
            match serde_json::from_slice(&body) {
                Ok(value) => {
                    debug!(operation, url, "Cache hit");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(operation, url, error = %e, "Dropping undecodable cache entry");
                    self.cache.remove(url);
                }
            }
        }

        debug!(operation, url, "Cache miss, fetching");
        let body = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| ClientError::from_fetch(operation, e))?;

        let value = serde_json::from_slice(&body)
            .map_err(|source| ClientError::Decode { operation, source })?;

        self.cache.put(url, body);
        debug!(operation, url, "Stored response in cache");

        Ok(value)
    }
}

/// Validates a user-supplied name for use as a single URL path segment
fn path_segment<'a>(operation: &'static str, raw: &'a str) -> Result<&'a str, ClientError> {
    let segment = raw.trim();
    if segment.is_empty() {
        return Err(ClientError::InvalidInput {
            operation,
            reason: "name must not be empty".to_string(),
        });
    }
    if segment == "." || segment == ".." {
        return Err(ClientError::InvalidInput {
            operation,
            reason: format!("name {:?} is a relative path segment", segment),
        });
    }
    // URL parsing treats a backslash as '/' for http(s)
    if let Some(c) = segment
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
    {
        return Err(ClientError::InvalidInput {
            operation,
            reason: format!("name {:?} contains invalid character {:?}", segment, c),
        });
    }
    Ok(segment)
}
