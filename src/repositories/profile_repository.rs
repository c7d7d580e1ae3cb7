// src/repositories/profile_repository.rs
//
// UserProfile persistence on top of the document store
//
// Maps the `users/{uid}` document to UserProfile and back. Reading is
// lenient: a missing or non-array `favorites` field reads as an empty list.
// Entries that do not parse are left out of the profile but carried back
// into the stored array on the next write.

use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::{FavoriteEntry, UserProfile};
use crate::error::{AppError, AppResult};
use crate::repositories::document_store::{Document, DocumentStore, USERS_COLLECTION};

/// A stored favorites item that did not parse as a FavoriteEntry
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableFavorite {
    /// Index in the stored array when it was read
    pub position: usize,
    pub raw: Value,
}

impl UnreadableFavorite {
    pub fn external_id(&self) -> Option<&str> {
        self.raw.get("imdbID").and_then(Value::as_str)
    }
}

/// A profile as read, with the revision the write-back can be checked against
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    pub profile: UserProfile,
    /// Stored items the profile could not represent, in stored order
    pub unreadable: Vec<UnreadableFavorite>,
    pub revision: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, user_id: &str) -> AppResult<Option<ProfileSnapshot>>;

    /// Write the full initial document (used once, at signup)
    async fn create(&self, profile: &UserProfile) -> AppResult<()>;

    /// Replace the favorites field with `favorites`, leaving other fields alone.
    /// `carried` items are put back verbatim at their recorded positions.
    /// Returns the new revision.
    async fn replace_favorites(
        &self,
        user_id: &str,
        favorites: &[FavoriteEntry],
        carried: &[UnreadableFavorite],
        expected_revision: Option<u64>,
    ) -> AppResult<u64>;
}

pub struct DocumentProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn text_field(data: &Document, key: &str) -> String {
        match data.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn favorites_field(
        user_id: &str,
        data: &Document,
    ) -> (Vec<FavoriteEntry>, Vec<UnreadableFavorite>) {
        let mut entries = Vec::new();
        let mut unreadable = Vec::new();

        let Some(Value::Array(items)) = data.get("favorites") else {
            return (entries, unreadable);
        };

        for (position, item) in items.iter().enumerate() {
            match serde_json::from_value(item.clone()) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!("Unreadable favorite #{} for user {}: {}", position, user_id, e);
                    unreadable.push(UnreadableFavorite {
                        position,
                        raw: item.clone(),
                    });
                }
            }
        }

        (entries, unreadable)
    }

    /// Map a stored document to a snapshot
    fn document_to_snapshot(user_id: &str, data: &Document, revision: u64) -> ProfileSnapshot {
        let (favorites, unreadable) = Self::favorites_field(user_id, data);

        ProfileSnapshot {
            profile: UserProfile {
                user_id: user_id.to_string(),
                first_name: Self::text_field(data, "firstName"),
                last_name: Self::text_field(data, "lastName"),
                age: Self::text_field(data, "age"),
                email: Self::text_field(data, "email"),
                favorites,
            },
            unreadable,
            revision,
        }
    }

    /// Serialize `favorites` and slot the carried items back in
    fn favorites_value(
        favorites: &[FavoriteEntry],
        carried: &[UnreadableFavorite],
    ) -> AppResult<Value> {
        let mut items = favorites
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let mut carried: Vec<&UnreadableFavorite> = carried.iter().collect();
        carried.sort_by_key(|item| item.position);
        for item in carried {
            let at = item.position.min(items.len());
            items.insert(at, item.raw.clone());
        }

        Ok(Value::Array(items))
    }

    fn profile_to_document(profile: &UserProfile) -> AppResult<Document> {
        match serde_json::to_value(profile)? {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::Other(
                "Profile did not serialize to an object".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ProfileRepository for DocumentProfileRepository {
    async fn find(&self, user_id: &str) -> AppResult<Option<ProfileSnapshot>> {
        let stored = self.store.get(USERS_COLLECTION, user_id).await?;

        Ok(stored.map(|doc| Self::document_to_snapshot(user_id, &doc.data, doc.revision)))
    }

    async fn create(&self, profile: &UserProfile) -> AppResult<()> {
        let data = Self::profile_to_document(profile)?;
        self.store.set(USERS_COLLECTION, &profile.user_id, data).await
    }

    async fn replace_favorites(
        &self,
        user_id: &str,
        favorites: &[FavoriteEntry],
        carried: &[UnreadableFavorite],
        expected_revision: Option<u64>,
    ) -> AppResult<u64> {
        let mut fields = Document::new();
        fields.insert(
            "favorites".to_string(),
            Self::favorites_value(favorites, carried)?,
        );

        self.store
            .update(USERS_COLLECTION, user_id, fields, expected_revision)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::document_store::{MockDocumentStore, StoredDocument};
    use serde_json::json;

    fn stored(value: Value) -> StoredDocument {
        StoredDocument {
            data: value.as_object().cloned().unwrap(),
            revision: 4,
        }
    }

    fn repo_returning(value: Value) -> DocumentProfileRepository {
        let mut store = MockDocumentStore::new();
        let doc = stored(value);
        store
            .expect_get()
            .withf(|collection, id| collection == USERS_COLLECTION && id == "uid-1")
            .return_once(move |_, _| Ok(Some(doc)));
        DocumentProfileRepository::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_find_maps_document() {
        let repo = repo_returning(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "age": "36",
            "email": "ada@example.org",
            "favorites": [{ "imdbID": "tt001", "Title": "A", "Type": "movie" }]
        }));

        let snapshot = repo.find("uid-1").await.unwrap().unwrap();
        assert_eq!(snapshot.revision, 4);
        assert_eq!(snapshot.profile.user_id, "uid-1");
        assert_eq!(snapshot.profile.first_name, "Ada");
        assert_eq!(snapshot.profile.age, "36");
        assert_eq!(snapshot.profile.favorites.len(), 1);
        assert_eq!(snapshot.profile.favorites[0].title, "A");
    }

    #[tokio::test]
    async fn test_missing_favorites_field_reads_empty() {
        // Profiles written before favorites existed have no such field
        let repo = repo_returning(json!({ "firstName": "Ada", "age": 40 }));

        let snapshot = repo.find("uid-1").await.unwrap().unwrap();
        assert!(snapshot.profile.favorites.is_empty());
        assert_eq!(snapshot.profile.age, "40");
    }

    #[tokio::test]
    async fn test_non_array_favorites_reads_empty() {
        let repo = repo_returning(json!({ "favorites": "oops" }));

        let snapshot = repo.find("uid-1").await.unwrap().unwrap();
        assert!(snapshot.profile.favorites.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_entries_are_set_aside() {
        let repo = repo_returning(json!({
            "favorites": [
                { "Title": "no id" },
                { "imdbID": "tt002", "Title": "B" },
                { "imdbID": "tt003" }
            ]
        }));

        let snapshot = repo.find("uid-1").await.unwrap().unwrap();
        assert_eq!(snapshot.profile.favorites.len(), 1);
        assert_eq!(snapshot.profile.favorites[0].external_id, "tt002");

        let positions: Vec<_> = snapshot.unreadable.iter().map(|u| u.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(snapshot.unreadable[0].external_id(), None);
        assert_eq!(snapshot.unreadable[1].external_id(), Some("tt003"));
    }

    #[test]
    fn test_carried_items_return_to_their_slots() {
        let carried = vec![
            UnreadableFavorite {
                position: 0,
                raw: json!({ "imdbID": "tt100" }),
            },
            UnreadableFavorite {
                position: 9,
                raw: json!("not an object"),
            },
        ];

        let value = DocumentProfileRepository::favorites_value(
            &[FavoriteEntry::new("tt200", "B")],
            &carried,
        )
        .unwrap();

        assert_eq!(
            value,
            json!([
                { "imdbID": "tt100" },
                { "imdbID": "tt200", "Title": "B", "Type": "movie" },
                "not an object"
            ])
        );
    }

    #[tokio::test]
    async fn test_find_missing_document() {
        let mut store = MockDocumentStore::new();
        store.expect_get().return_once(|_, _| Ok(None));
        let repo = DocumentProfileRepository::new(Arc::new(store));

        assert!(repo.find("uid-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_favorites_updates_only_that_field() {
        let mut store = MockDocumentStore::new();
        store
            .expect_update()
            .withf(|collection, id, fields, expected| {
                collection == USERS_COLLECTION
                    && id == "uid-1"
                    && fields.len() == 1
                    && fields["favorites"][0]["imdbID"] == "tt001"
                    && *expected == Some(3)
            })
            .times(1)
            .return_once(|_, _, _, _| Ok(4));
        let repo = DocumentProfileRepository::new(Arc::new(store));

        let revision = repo
            .replace_favorites("uid-1", &[FavoriteEntry::new("tt001", "A")], &[], Some(3))
            .await
            .unwrap();
        assert_eq!(revision, 4);
    }

    #[tokio::test]
    async fn test_create_writes_full_document() {
        let mut store = MockDocumentStore::new();
        store
            .expect_set()
            .withf(|collection, id, data| {
                collection == USERS_COLLECTION
                    && id == "uid-1"
                    && data["firstName"] == "Ada"
                    && data["favorites"] == json!([])
            })
            .times(1)
            .return_once(|_, _, _| Ok(()));
        let repo = DocumentProfileRepository::new(Arc::new(store));

        let profile = UserProfile::new("uid-1", "Ada", "Lovelace", "36", "ada@example.org");
        repo.create(&profile).await.unwrap();
    }
}
