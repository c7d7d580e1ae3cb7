// src/application/screens/home.rs
//
// Home: opening listing, search and add-to-favorites
//
// Search results, when there are any, replace the opening listing on
// display. A failed fetch keeps whatever was shown before.

use log::warn;
use std::sync::Arc;

use crate::application::dto::{AddFavoriteResultDto, TitleDto};
use crate::application::error_handling::{ErrorResponse, ScreenResult, ToErrorResponse};
use crate::application::state::AppState;
use crate::integrations::TitleSummary;

pub struct HomeScreen {
    state: Arc<AppState>,
    top_titles: Vec<TitleSummary>,
    search_results: Vec<TitleSummary>,
    query: String,
    show_search_field: bool,
}

impl HomeScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            top_titles: Vec::new(),
            search_results: Vec::new(),
            query: String::new(),
            show_search_field: false,
        }
    }

    /// Fetch the opening listing
    pub async fn open(&mut self) -> ScreenResult<Vec<TitleDto>> {
        self.top_titles = self
            .state
            .search_service
            .default_listing()
            .await
            .to_error_response()?;
        Ok(self.displayed())
    }

    pub fn toggle_search_field(&mut self) -> bool {
        self.show_search_field = !self.show_search_field;
        self.query.clear();
        self.show_search_field
    }

    pub fn is_search_field_shown(&self) -> bool {
        self.show_search_field
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run the current query and hide the search field
    pub async fn submit_search(&mut self) -> ScreenResult<Vec<TitleDto>> {
        self.search_results = self
            .state
            .search_service
            .search(&self.query)
            .await
            .to_error_response()?;
        self.show_search_field = false;
        Ok(self.displayed())
    }

    /// Search results if there are any, otherwise the opening listing
    pub fn displayed(&self) -> Vec<TitleDto> {
        self.visible().iter().map(TitleDto::from).collect()
    }

    /// Save a listed title to the user's favorites.
    ///
    /// The provider's detail record is stored when it can be fetched; if
    /// the lookup fails the listing record is saved as is.
    pub async fn add_to_favorites(&self, external_id: &str) -> ScreenResult<AddFavoriteResultDto> {
        let listed = self
            .visible()
            .iter()
            .find(|t| t.external_id == external_id)
            .cloned()
            .ok_or_else(|| ErrorResponse::not_found("Title"))?;

        let record = match self.state.search_service.details(external_id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => listed,
            Err(e) => {
                warn!("Saving {} without details: {}", external_id, e);
                listed
            }
        };

        let outcome = self
            .state
            .favorites_service
            .add(&self.state.session, record.into())
            .await
            .to_error_response()?;

        Ok(AddFavoriteResultDto::from(&outcome))
    }

    pub async fn sign_out(&self) -> ScreenResult<()> {
        super::sign_out(&self.state).await
    }

    fn visible(&self) -> &[TitleSummary] {
        if self.search_results.is_empty() {
            &self.top_titles
        } else {
            &self.search_results
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::application::screens::test_support::{signed_in_state, summary};
    use crate::domain::TitleType;
    use crate::error::AppError;
    use crate::integrations::metadata::MockMetadataProvider;

    fn listing_provider() -> MockMetadataProvider {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search()
            .withf(|term| term == "movie")
            .returning(|_| {
                Ok(vec![
                    summary("tt001", "A", TitleType::Movie),
                    summary("tt002", "B", TitleType::Movie),
                ])
            });
        provider
    }

    #[tokio::test]
    async fn test_open_shows_listing() {
        let state = signed_in_state(listing_provider()).await;
        let mut screen = HomeScreen::new(state);

        let shown = screen.open().await.unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].id, "tt001");
    }

    #[tokio::test]
    async fn test_search_results_replace_listing() {
        let mut provider = listing_provider();
        provider
            .expect_search()
            .withf(|term| term == "matrix")
            .returning(|_| Ok(vec![summary("tt0133093", "The Matrix", TitleType::Movie)]));
        let state = signed_in_state(provider).await;
        let mut screen = HomeScreen::new(state);
        screen.open().await.unwrap();

        assert!(screen.toggle_search_field());
        screen.set_query("matrix");
        let shown = screen.submit_search().await.unwrap();

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "The Matrix");
        assert!(!screen.is_search_field_shown());
    }

    #[tokio::test]
    async fn test_empty_search_falls_back_to_listing() {
        let mut provider = listing_provider();
        provider
            .expect_search()
            .withf(|term| term == "zzzz")
            .returning(|_| Ok(vec![]));
        let state = signed_in_state(provider).await;
        let mut screen = HomeScreen::new(state);
        screen.open().await.unwrap();

        screen.set_query("zzzz");
        let shown = screen.submit_search().await.unwrap();
        assert_eq!(shown.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_results() {
        let mut provider = listing_provider();
        provider
            .expect_search()
            .withf(|term| term == "matrix")
            .returning(|_| Err(AppError::MetadataProvider("status 503".to_string())));
        let state = signed_in_state(provider).await;
        let mut screen = HomeScreen::new(state);
        screen.open().await.unwrap();
        screen.toggle_search_field();
        screen.set_query("matrix");

        let err = screen.submit_search().await.unwrap_err();

        assert_eq!(err.error_type, ErrorType::ExternalService);
        assert_eq!(screen.displayed().len(), 2);
        assert!(screen.is_search_field_shown());
    }

    #[tokio::test]
    async fn test_add_to_favorites_stores_details() {
        let mut provider = listing_provider();
        provider.expect_details().returning(|id| {
            let mut detail = summary(id, "A", TitleType::Movie);
            detail.director = Some("Someone".to_string());
            Ok(Some(detail))
        });
        let state = signed_in_state(provider).await;
        let mut screen = HomeScreen::new(state.clone());
        screen.open().await.unwrap();

        let first = screen.add_to_favorites("tt001").await.unwrap();
        let second = screen.add_to_favorites("tt001").await.unwrap();

        assert!(first.added);
        assert!(!second.added);
        assert_eq!(second.favorite_count, 1);

        let stored = state.favorites_service.load(&state.session).await.unwrap();
        assert_eq!(stored[0].director.as_deref(), Some("Someone"));
    }

    #[tokio::test]
    async fn test_add_without_details_uses_listing_record() {
        let mut provider = listing_provider();
        provider
            .expect_details()
            .returning(|_| Err(AppError::MetadataProvider("timeout".to_string())));
        let state = signed_in_state(provider).await;
        let mut screen = HomeScreen::new(state.clone());
        screen.open().await.unwrap();

        assert!(screen.add_to_favorites("tt002").await.unwrap().added);

        let stored = state.favorites_service.load(&state.session).await.unwrap();
        assert_eq!(stored[0].title, "B");
        assert!(stored[0].director.is_none());
    }

    #[tokio::test]
    async fn test_add_unlisted_title() {
        let state = signed_in_state(listing_provider()).await;
        let mut screen = HomeScreen::new(state);
        screen.open().await.unwrap();

        assert!(screen.add_to_favorites("tt404").await.is_err());
    }

    #[tokio::test]
    async fn test_sign_out() {
        let state = signed_in_state(listing_provider()).await;
        let screen = HomeScreen::new(state.clone());

        screen.sign_out().await.unwrap();
        assert!(!state.session.is_authenticated());
    }
}
