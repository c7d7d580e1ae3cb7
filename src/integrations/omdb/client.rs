// src/integrations/omdb/client.rs
//
// OMDb API client
//
// ARCHITECTURE:
// - Plain HTTP GET with query parameters, JSON responses
// - Maps wire records to TitleSummary DTOs (NO domain mutation)
// - Only the first page of results is requested
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - "no results" is not an error: the provider reports it in-band with
//   Response = "False" and that maps to an empty list
// - Transport, status and parse failures are returned, never swallowed

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::TitleType;
use crate::error::{AppError, AppResult};
use crate::integrations::metadata::{MetadataProvider, TitleSummary};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

/// Placeholder the provider uses for unknown detail fields
const NOT_AVAILABLE: &str = "N/A";

/// Search response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,

    #[serde(rename = "Response", default)]
    response: Option<String>,

    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
}

/// Detail lookup response (`i=<id>`)
#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,

    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
}

/// OMDb API Client
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::MetadataProvider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http_client,
        })
    }

    /// Client against the public endpoint with a 30 second timeout
    pub fn with_api_key(api_key: impl Into<String>) -> AppResult<Self> {
        Self::new(api_key, DEFAULT_BASE_URL, Duration::from_secs(30))
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json(&self, params: &[(&str, &str)]) -> AppResult<String> {
        let url = format!("{}/", self.base_url);
        debug!("OMDb request {:?}", params);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::MetadataProvider(format!("OMDb request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::MetadataProvider(format!(
                "OMDb returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::MetadataProvider(format!("Failed to read OMDb response: {}", e)))
    }

    /// Parse a search response body
    pub fn parse_search_response(body: &str) -> AppResult<Vec<TitleSummary>> {
        let parsed: SearchResponse = serde_json::from_str(body)
            .map_err(|e| AppError::MetadataProvider(format!("Failed to parse OMDb response: {}", e)))?;

        if parsed.response.as_deref() == Some("False") {
            debug!(
                "OMDb returned no results: {}",
                parsed.error.as_deref().unwrap_or("unknown reason")
            );
            return Ok(Vec::new());
        }

        Ok(parsed.search.into_iter().map(Self::map_search_item).collect())
    }

    /// Parse a detail response body
    pub fn parse_detail_response(body: &str) -> AppResult<Option<TitleSummary>> {
        let parsed: DetailResponse = serde_json::from_str(body)
            .map_err(|e| AppError::MetadataProvider(format!("Failed to parse OMDb response: {}", e)))?;

        if parsed.response.as_deref() == Some("False") {
            debug!(
                "OMDb detail lookup failed: {}",
                parsed.error.as_deref().unwrap_or("unknown reason")
            );
            return Ok(None);
        }

        let (Some(external_id), Some(title)) = (parsed.imdb_id, parsed.title) else {
            return Ok(None);
        };

        Ok(Some(TitleSummary {
            external_id,
            title,
            year: parsed.year,
            poster: parsed.poster,
            title_type: Self::map_kind(parsed.kind),
            director: Self::available(parsed.director),
            cast: Self::available(parsed.actors),
            country: Self::available(parsed.country),
        }))
    }

    fn map_search_item(item: SearchItem) -> TitleSummary {
        TitleSummary {
            external_id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster: item.poster,
            title_type: Self::map_kind(item.kind),
            director: None,
            cast: None,
            country: None,
        }
    }

    fn map_kind(kind: Option<String>) -> TitleType {
        kind.map(TitleType::from).unwrap_or_default()
    }

    fn available(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE)
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    async fn search(&self, term: &str) -> AppResult<Vec<TitleSummary>> {
        let body = self
            .get_json(&[
                ("s", term),
                ("type", "movie"),
                ("r", "json"),
                ("page", "1"),
            ])
            .await?;

        Self::parse_search_response(&body)
    }

    async fn details(&self, external_id: &str) -> AppResult<Option<TitleSummary>> {
        let body = self.get_json(&[("i", external_id), ("r", "json")]).await?;
        Self::parse_detail_response(&body)
    }
}
