// src/services/favorites_service.rs
//
// Favorites synchronization
//
// The profile document is the source of truth. Every operation reads it
// first, decides locally and writes the whole favorites field back. Nothing
// is cached between calls.
//
// CRITICAL RULES:
// - Duplicate suppression is by external identifier alone
// - Add of a listed id and Remove of an absent id issue no write
// - Stored items that do not parse are written back untouched
// - Failures are logged and returned; there is no retry

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{validate_favorite_entry, validate_unique_ids, FavoriteEntry, FavoritesList};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FavoriteAdded, FavoriteAlreadyPresent, FavoriteRemoved};
use crate::repositories::{ProfileRepository, UnreadableFavorite};
use crate::services::session::SessionContext;

/// How favorites writes treat concurrent modification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyPolicy {
    /// The last writer replaces the field, whatever happened in between
    #[default]
    LastWriteWins,

    /// Writes carry the revision read; a changed document fails with
    /// `AppError::Conflict`
    Revisioned,
}

/// Result of an add
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    /// The list as stored after the call
    pub favorites: Vec<FavoriteEntry>,
    /// `false` when the id was already listed and nothing was written
    pub added: bool,
}

pub struct FavoritesService {
    profile_repo: Arc<dyn ProfileRepository>,
    event_bus: Arc<EventBus>,
    policy: ConcurrencyPolicy,
}

impl FavoritesService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        event_bus: Arc<EventBus>,
        policy: ConcurrencyPolicy,
    ) -> Self {
        Self {
            profile_repo,
            event_bus,
            policy,
        }
    }

    pub fn policy(&self) -> ConcurrencyPolicy {
        self.policy
    }

    /// Current favorites of the signed-in user.
    ///
    /// A missing profile document reads as an empty list.
    pub async fn load(&self, ctx: &SessionContext) -> AppResult<Vec<FavoriteEntry>> {
        let session = ctx.require()?;
        let stored = self.read(&session.user_id).await?;

        Ok(stored.list.into_vec())
    }

    /// Append `entry` unless its id is already listed
    pub async fn add(&self, ctx: &SessionContext, entry: FavoriteEntry) -> AppResult<AddOutcome> {
        let session = ctx.require()?;
        validate_favorite_entry(&entry)?;

        let mut stored = self.read(&session.user_id).await?;

        let external_id = entry.external_id.clone();
        let title = entry.title.clone();

        let carried_match = stored
            .carried
            .iter()
            .any(|item| item.external_id() == Some(external_id.as_str()));

        if carried_match || !stored.list.add(entry) {
            info!("{} is already a favorite of {}", external_id, session.user_id);
            self.event_bus.emit(FavoriteAlreadyPresent::new(
                session.user_id,
                external_id,
                title,
            ));
            return Ok(AddOutcome {
                favorites: stored.list.into_vec(),
                added: false,
            });
        }

        self.write(&session.user_id, &stored).await?;

        info!("Added {} to favorites of {}", external_id, session.user_id);
        self.event_bus
            .emit(FavoriteAdded::new(session.user_id, external_id, title));

        Ok(AddOutcome {
            favorites: stored.list.into_vec(),
            added: true,
        })
    }

    /// Drop `external_id` from the list. Absent ids are a no-op.
    pub async fn remove(
        &self,
        ctx: &SessionContext,
        external_id: &str,
    ) -> AppResult<Vec<FavoriteEntry>> {
        let session = ctx.require()?;

        let mut stored = self.read(&session.user_id).await?;

        let carried_before = stored.carried.len();
        stored
            .carried
            .retain(|item| item.external_id() != Some(external_id));
        let carried_removed = stored.carried.len() != carried_before;

        if !stored.list.remove(external_id) && !carried_removed {
            return Ok(stored.list.into_vec());
        }

        self.write(&session.user_id, &stored).await?;

        info!("Removed {} from favorites of {}", external_id, session.user_id);
        self.event_bus.emit(FavoriteRemoved::new(
            session.user_id,
            external_id.to_string(),
        ));

        Ok(stored.list.into_vec())
    }

    // ========================================================================
    // INTERNAL: Store Access
    // ========================================================================

    async fn read(&self, user_id: &str) -> AppResult<StoredFavorites> {
        let snapshot = self.profile_repo.find(user_id).await.map_err(|e| {
            warn!("Failed to read favorites of {}: {}", user_id, e);
            e.into_read_failure()
        })?;

        Ok(match snapshot {
            Some(snapshot) => StoredFavorites {
                list: FavoritesList::from_entries(snapshot.profile.favorites),
                carried: snapshot.unreadable,
                revision: Some(snapshot.revision),
            },
            None => StoredFavorites {
                list: FavoritesList::new(),
                carried: Vec::new(),
                revision: None,
            },
        })
    }

    async fn write(&self, user_id: &str, stored: &StoredFavorites) -> AppResult<()> {
        validate_unique_ids(stored.list.entries())?;

        let expected = match self.policy {
            ConcurrencyPolicy::LastWriteWins => None,
            ConcurrencyPolicy::Revisioned => stored.revision,
        };

        self.profile_repo
            .replace_favorites(user_id, stored.list.entries(), &stored.carried, expected)
            .await
            .map(|_| ())
            .map_err(|e| {
                warn!("Failed to write favorites of {}: {}", user_id, e);
                match e {
                    AppError::NotFound => AppError::RemoteWriteFailed(format!(
                        "Profile document for {} does not exist",
                        user_id
                    )),
                    other => other.into_write_failure(),
                }
            })
    }
}

/// The favorites field as read, ready to be edited and written back
struct StoredFavorites {
    list: FavoritesList,
    carried: Vec<UnreadableFavorite>,
    revision: Option<u64>,
}
