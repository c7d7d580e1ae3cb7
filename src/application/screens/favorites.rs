// src/application/screens/favorites.rs
//
// Favorites: listing, detail view and removal
//
// The local list only changes after the store confirmed a write.

use std::sync::Arc;

use crate::application::dto::{FavoriteDetailDto, TitleDto};
use crate::application::error_handling::{ScreenResult, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::FavoriteEntry;

pub struct FavoritesScreen {
    state: Arc<AppState>,
    favorites: Vec<FavoriteEntry>,
    selected: Option<FavoriteEntry>,
}

impl FavoritesScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            favorites: Vec::new(),
            selected: None,
        }
    }

    pub async fn open(&mut self) -> ScreenResult<Vec<TitleDto>> {
        self.favorites = self
            .state
            .favorites_service
            .load(&self.state.session)
            .await
            .to_error_response()?;
        Ok(self.movies())
    }

    /// Movie entries only, in the order they were added
    pub fn movies(&self) -> Vec<TitleDto> {
        self.favorites
            .iter()
            .filter(|e| e.is_movie())
            .map(TitleDto::from)
            .collect()
    }

    pub fn all(&self) -> Vec<TitleDto> {
        self.favorites.iter().map(TitleDto::from).collect()
    }

    /// Open the detail view for a listed favorite
    pub fn select(&mut self, external_id: &str) -> Option<FavoriteDetailDto> {
        self.selected = self
            .favorites
            .iter()
            .find(|e| e.external_id == external_id)
            .cloned();
        self.selected.as_ref().map(FavoriteDetailDto::from)
    }

    pub fn selected(&self) -> Option<FavoriteDetailDto> {
        self.selected.as_ref().map(FavoriteDetailDto::from)
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub async fn remove(&mut self, external_id: &str) -> ScreenResult<Vec<TitleDto>> {
        let remaining = self
            .state
            .favorites_service
            .remove(&self.state.session, external_id)
            .await
            .to_error_response()?;

        self.favorites = remaining;
        if self
            .selected
            .as_ref()
            .is_some_and(|s| s.external_id == external_id)
        {
            self.selected = None;
        }

        Ok(self.movies())
    }

    pub async fn sign_out(&self) -> ScreenResult<()> {
        super::sign_out(&self.state).await
    }
}
