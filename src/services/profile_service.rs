// src/services/profile_service.rs
use log::warn;
use std::sync::Arc;

use crate::domain::UserProfile;
use crate::error::AppResult;
use crate::repositories::ProfileRepository;
use crate::services::session::SessionContext;

/// Read-only access to the signed-in user's profile
pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn current_profile(&self, ctx: &SessionContext) -> AppResult<Option<UserProfile>> {
        let session = ctx.require()?;

        let snapshot = self.profile_repo.find(&session.user_id).await.map_err(|e| {
            warn!("Failed to read profile of {}: {}", session.user_id, e);
            e.into_read_failure()
        })?;

        Ok(snapshot.map(|s| s.profile))
    }

    /// First name for the greeting, `None` when no profile was written
    pub async fn first_name(&self, ctx: &SessionContext) -> AppResult<Option<String>> {
        Ok(self.current_profile(ctx).await?.map(|p| p.first_name))
    }
}
