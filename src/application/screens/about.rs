// src/application/screens/about.rs
use std::sync::Arc;

use crate::application::error_handling::{ScreenResult, ToErrorResponse};
use crate::application::state::AppState;

pub struct AboutScreen {
    state: Arc<AppState>,
    first_name: Option<String>,
}

impl AboutScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            first_name: None,
        }
    }

    /// Load the signed-in user's first name
    pub async fn open(&mut self) -> ScreenResult<Option<String>> {
        self.first_name = self
            .state
            .profile_service
            .first_name(&self.state.session)
            .await
            .to_error_response()?;
        Ok(self.first_name.clone())
    }

    pub fn greeting(&self) -> String {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => format!("Hello, {}", name),
            _ => "Hello".to_string(),
        }
    }

    pub async fn sign_out(&self) -> ScreenResult<()> {
        super::sign_out(&self.state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::application::screens::test_support::{signed_in_state, sqlite_state};
    use crate::integrations::metadata::MockMetadataProvider;

    #[tokio::test]
    async fn test_greets_by_first_name() {
        let state = signed_in_state(MockMetadataProvider::new()).await;
        let mut screen = AboutScreen::new(state);

        assert_eq!(screen.open().await.unwrap().as_deref(), Some("Ada"));
        assert_eq!(screen.greeting(), "Hello, Ada");
    }

    #[tokio::test]
    async fn test_signed_out() {
        let mut screen = AboutScreen::new(sqlite_state(MockMetadataProvider::new()));

        let err = screen.open().await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotAuthenticated);
        assert_eq!(screen.greeting(), "Hello");
    }
}
