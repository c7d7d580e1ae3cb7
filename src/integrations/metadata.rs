// src/integrations/metadata.rs
//
// Metadata search provider port
//
// Providers return DTOs; turning one into a FavoriteEntry is the caller's
// decision.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{FavoriteEntry, TitleType};
use crate::error::AppResult;

/// One title as listed by the metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSummary {
    pub external_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub title_type: TitleType,

    // Only populated by detail lookups
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
}

impl From<TitleSummary> for FavoriteEntry {
    fn from(summary: TitleSummary) -> Self {
        FavoriteEntry {
            external_id: summary.external_id,
            title: summary.title,
            year: summary.year,
            poster: summary.poster,
            title_type: summary.title_type,
            director: summary.director,
            cast: summary.cast,
            country: summary.country,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// First page of titles matching `term`. No match is an empty list.
    async fn search(&self, term: &str) -> AppResult<Vec<TitleSummary>>;

    /// Full record for one title, `None` when the provider does not know it
    async fn details(&self, external_id: &str) -> AppResult<Option<TitleSummary>>;
}
