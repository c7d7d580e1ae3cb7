// src/application/screens/login.rs
use log::info;
use std::sync::Arc;

use crate::application::dto::SessionDto;
use crate::application::error_handling::{ScreenResult, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::LoginForm;

pub struct LoginScreen {
    state: Arc<AppState>,
    pub form: LoginForm,
}

impl LoginScreen {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            form: LoginForm::default(),
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    /// Sign in with the current form. The password is cleared on success.
    pub async fn submit(&mut self) -> ScreenResult<SessionDto> {
        let session = self
            .state
            .auth_service
            .login(&self.state.session, &self.form)
            .await
            .to_error_response()?;

        info!("Login success");
        self.form.password.clear();
        Ok(SessionDto::from(&session))
    }
}
