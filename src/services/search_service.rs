// src/services/search_service.rs
//
// Title search glue between screens and the metadata provider

use log::{debug, warn};
use std::sync::Arc;

use crate::error::AppResult;
use crate::events::{EventBus, TitlesSearched};
use crate::integrations::{MetadataProvider, TitleSummary};

/// Term behind the home screen's opening listing
pub const DEFAULT_LISTING_TERM: &str = "movie";

pub struct SearchService {
    provider: Arc<dyn MetadataProvider>,
    event_bus: Arc<EventBus>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn MetadataProvider>, event_bus: Arc<EventBus>) -> Self {
        Self { provider, event_bus }
    }

    /// Titles shown before the user searches for anything
    pub async fn default_listing(&self) -> AppResult<Vec<TitleSummary>> {
        self.run(DEFAULT_LISTING_TERM).await
    }

    /// Search with the user's term. A blank term returns nothing without a request.
    pub async fn search(&self, query: &str) -> AppResult<Vec<TitleSummary>> {
        let term = query.trim();
        if term.is_empty() {
            debug!("Blank search query, skipping request");
            return Ok(Vec::new());
        }
        self.run(term).await
    }

    pub async fn details(&self, external_id: &str) -> AppResult<Option<TitleSummary>> {
        self.provider.details(external_id).await.map_err(|e| {
            warn!("Detail lookup for {} failed: {}", external_id, e);
            e
        })
    }

    async fn run(&self, term: &str) -> AppResult<Vec<TitleSummary>> {
        let results = self.provider.search(term).await.map_err(|e| {
            warn!("Search for {:?} failed: {}", term, e);
            e
        })?;

        self.event_bus
            .emit(TitlesSearched::new(term.to_string(), results.len()));

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TitleType;
    use crate::error::AppError;
    use crate::integrations::metadata::MockMetadataProvider;

    fn summary(id: &str, title: &str) -> TitleSummary {
        TitleSummary {
            external_id: id.to_string(),
            title: title.to_string(),
            year: "1999".to_string(),
            poster: String::new(),
            title_type: TitleType::Movie,
            director: None,
            cast: None,
            country: None,
        }
    }

    #[tokio::test]
    async fn test_default_listing_uses_movie_term() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search()
            .withf(|term| term == "movie")
            .times(1)
            .returning(|_| Ok(vec![summary("tt001", "A")]));
        let bus = Arc::new(EventBus::new());

        let service = SearchService::new(Arc::new(provider), bus.clone());
        assert_eq!(service.default_listing().await.unwrap().len(), 1);
        assert_eq!(bus.get_event_log()[0].event_type, "TitlesSearched");
    }

    #[tokio::test]
    async fn test_search_trims_term() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search()
            .withf(|term| term == "matrix")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = SearchService::new(Arc::new(provider), Arc::new(EventBus::new()));
        assert!(service.search("  matrix ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_skips_provider() {
        let mut provider = MockMetadataProvider::new();
        provider.expect_search().never();

        let service = SearchService::new(Arc::new(provider), Arc::new(EventBus::new()));
        assert!(service.search("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_returned() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search()
            .returning(|_| Err(AppError::MetadataProvider("status 500".to_string())));
        let bus = Arc::new(EventBus::new());

        let service = SearchService::new(Arc::new(provider), bus.clone());
        assert!(matches!(
            service.search("matrix").await,
            Err(AppError::MetadataProvider(_))
        ));
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_details_passthrough() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_details()
            .withf(|id| id == "tt001")
            .returning(|id| Ok(Some(summary(id, "A"))));

        let service = SearchService::new(Arc::new(provider), Arc::new(EventBus::new()));
        let detail = service.details("tt001").await.unwrap().unwrap();
        assert_eq!(detail.title, "A");
    }
}
