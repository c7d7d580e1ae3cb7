// src/services/auth_service.rs
//
// Login, signup and sign-out flows
//
// Form checks run first and short-circuit; the identity provider is only
// contacted with input that passed them.

use log::{info, warn};
use std::sync::Arc;

use crate::domain::{
    validate_login, validate_profile, validate_signup, LoginForm, Session, SignupForm, UserProfile,
};
use crate::error::AppResult;
use crate::events::{EventBus, UserSignedIn, UserSignedOut, UserSignedUp};
use crate::integrations::IdentityProvider;
use crate::repositories::ProfileRepository;
use crate::services::session::SessionContext;

pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    profile_repo: Arc<dyn ProfileRepository>,
    event_bus: Arc<EventBus>,
}

impl AuthService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profile_repo: Arc<dyn ProfileRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            identity,
            profile_repo,
            event_bus,
        }
    }

    pub async fn login(&self, ctx: &SessionContext, form: &LoginForm) -> AppResult<Session> {
        validate_login(form)?;

        let session = self.identity.sign_in(form.email.trim(), &form.password).await?;
        ctx.begin(session.clone());

        info!("User {} signed in", session.user_id);
        self.event_bus.emit(UserSignedIn::new(session.user_id.clone()));

        Ok(session)
    }

    /// Create the account, sign in and write the initial profile.
    ///
    /// When the profile write fails the account and session remain; the
    /// error is returned so the caller can report it.
    pub async fn signup(&self, ctx: &SessionContext, form: &SignupForm) -> AppResult<Session> {
        validate_signup(form)?;

        let email = form.email.trim();
        let session = self.identity.create_account(email, &form.password).await?;
        ctx.begin(session.clone());

        let profile = UserProfile::new(
            session.user_id.clone(),
            form.first_name.trim(),
            form.last_name.trim(),
            form.age.trim(),
            email,
        );
        validate_profile(&profile)?;

        self.profile_repo.create(&profile).await.map_err(|e| {
            warn!("Failed to write profile for {}: {}", session.user_id, e);
            e.into_write_failure()
        })?;

        info!("User {} signed up", session.user_id);
        self.event_bus
            .emit(UserSignedUp::new(session.user_id.clone(), session.email.clone()));

        Ok(session)
    }

    /// End the active session. Signed-out contexts are left as they are.
    pub async fn sign_out(&self, ctx: &SessionContext) -> AppResult<()> {
        let Some(session) = ctx.current() else {
            return Ok(());
        };

        self.identity.sign_out(&session).await?;
        ctx.end();

        info!("User {} signed out", session.user_id);
        self.event_bus.emit(UserSignedOut::new(session.user_id));

        Ok(())
    }
}
