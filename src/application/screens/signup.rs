// src/application/screens/signup.rs
use log::info;
use std::sync::Arc;

use crate::application::dto::SessionDto;
use crate::application::error_handling::{ScreenResult, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::SignupForm;

pub struct SignupScreen {
    state: Arc<AppState>,
    pub form: SignupForm,
}

impl SignupScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            form: SignupForm::default(),
        }
    }

    /// Create the account and profile from the current form
    pub async fn submit(&mut self) -> ScreenResult<SessionDto> {
        let session = self
            .state
            .auth_service
            .signup(&self.state.session, &self.form)
            .await
            .to_error_response()?;

        info!("Signup success");
        self.form.password.clear();
        Ok(SessionDto::from(&session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::application::screens::test_support::sqlite_state;
    use crate::integrations::metadata::MockMetadataProvider;

    fn fill(screen: &mut SignupScreen, age: &str, password: &str) {
        screen.form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            age: age.to_string(),
            email: "ada@example.org".to_string(),
            password: password.to_string(),
        };
    }

    #[tokio::test]
    async fn test_signup_creates_profile() {
        let state = sqlite_state(MockMetadataProvider::new());
        let mut screen = SignupScreen::new(state.clone());
        fill(&mut screen, "18", "abc123");

        screen.submit().await.unwrap();

        assert_eq!(
            state.profile_service.first_name(&state.session).await.unwrap().as_deref(),
            Some("Ada")
        );
        assert!(state
            .favorites_service
            .load(&state.session)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_underage_rejected() {
        let state = sqlite_state(MockMetadataProvider::new());
        let mut screen = SignupScreen::new(state.clone());
        fill(&mut screen, "17", "abc123");

        let err = screen.submit().await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
        assert!(!state.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_second_signup_same_email() {
        let state = sqlite_state(MockMetadataProvider::new());
        let mut screen = SignupScreen::new(state.clone());
        fill(&mut screen, "30", "abc123");
        screen.submit().await.unwrap();

        fill(&mut screen, "30", "abc123");
        let err = screen.submit().await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Authentication);
    }
}
