// src/repositories/document_store.rs
//
// Document store port and its SQLite adapter
//
// Documents are JSON objects addressed by (collection, id). The store
// enforces nothing about their content; uniqueness of favorites and every
// other rule lives above this layer.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Transaction, TransactionBehavior};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::db::{with_connection, ConnectionPool};
use crate::error::{AppError, AppResult};

/// Collection holding one profile document per user
pub const USERS_COLLECTION: &str = "users";

/// Top-level fields of a document
pub type Document = Map<String, Value>;

/// A document together with its revision counter
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub data: Document,
    /// Starts at 1 on `set`, incremented by every `update`
    pub revision: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document; `None` when it does not exist
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>>;

    /// Create or fully replace a document
    async fn set(&self, collection: &str, id: &str, data: Document) -> AppResult<()>;

    /// Merge `fields` into the top level of an existing document.
    ///
    /// With `expected_revision` set, the write is rejected with
    /// `AppError::Conflict` unless the stored revision still matches.
    /// Returns the new revision. Fails with `AppError::NotFound` when the
    /// document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        expected_revision: Option<u64>,
    ) -> AppResult<u64>;
}

pub struct SqliteDocumentStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteDocumentStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn parse_data(raw: &str) -> AppResult<Document> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::Other(format!(
                "Stored document is not an object: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>> {
        let collection = collection.to_string();
        let id = id.to_string();

        with_connection(&self.pool, move |conn| {
            let row: Option<(String, i64)> = conn
                .query_row(
                    "SELECT data, revision FROM documents WHERE collection = ?1 AND id = ?2",
                    params![collection, id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            row.map(|(raw, revision)| {
                Ok(StoredDocument {
                    data: Self::parse_data(&raw)?,
                    revision: revision as u64,
                })
            })
            .transpose()
        })
        .await
    }

    async fn set(&self, collection: &str, id: &str, data: Document) -> AppResult<()> {
        let collection = collection.to_string();
        let id = id.to_string();

        with_connection(&self.pool, move |conn| {
            let raw = serde_json::to_string(&data)?;
            let now = Utc::now().to_rfc3339();

            conn.execute(
                "INSERT INTO documents (collection, id, data, revision, created_at, updated_at)
                 VALUES (?1, ?2, ?3, 1, ?4, ?4)
                 ON CONFLICT(collection, id) DO UPDATE SET
                    data = excluded.data,
                    revision = 1,
                    updated_at = excluded.updated_at",
                params![collection, id, raw, now],
            )?;

            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
        expected_revision: Option<u64>,
    ) -> AppResult<u64> {
        let collection = collection.to_string();
        let id = id.to_string();

        with_connection(&self.pool, move |conn| {
            // Take the write lock before reading so concurrent writers queue
            // on busy_timeout instead of failing the read-to-write upgrade
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;

            let row: Option<(String, i64)> = tx
                .query_row(
                    "SELECT data, revision FROM documents WHERE collection = ?1 AND id = ?2",
                    params![collection, id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let (raw, revision) = row.ok_or(AppError::NotFound)?;
            let revision = revision as u64;

            if let Some(expected) = expected_revision {
                if expected != revision {
                    return Err(AppError::Conflict {
                        expected,
                        actual: revision,
                    });
                }
            }

            let mut data = Self::parse_data(&raw)?;
            for (key, value) in fields {
                data.insert(key, value);
            }

            let next_revision = revision + 1;
            tx.execute(
                "UPDATE documents SET data = ?3, revision = ?4, updated_at = ?5
                 WHERE collection = ?1 AND id = ?2",
                params![
                    collection,
                    id,
                    serde_json::to_string(&data)?,
                    next_revision as i64,
                    Utc::now().to_rfc3339(),
                ],
            )?;

            tx.commit()?;
            Ok(next_revision)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        create_connection_pool, create_in_memory_pool, get_connection, initialize_database,
    };
    use serde_json::json;

    fn store() -> SqliteDocumentStore {
        let pool = create_in_memory_pool().unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteDocumentStore::new(Arc::new(pool))
    }

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = store();
        assert!(store.get(USERS_COLLECTION, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = store();
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "firstName": "Ada" })))
            .await
            .unwrap();

        let stored = store.get(USERS_COLLECTION, "uid-1").await.unwrap().unwrap();
        assert_eq!(stored.data["firstName"], "Ada");
        assert_eq!(stored.revision, 1);
    }

    #[tokio::test]
    async fn test_set_replaces_whole_document() {
        let store = store();
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "a": 1, "b": 2 })))
            .await
            .unwrap();
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "a": 3 })))
            .await
            .unwrap();

        let stored = store.get(USERS_COLLECTION, "uid-1").await.unwrap().unwrap();
        assert_eq!(stored.data, doc(json!({ "a": 3 })));
    }

    #[tokio::test]
    async fn test_update_merges_top_level_fields() {
        let store = store();
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "firstName": "Ada", "favorites": [] })))
            .await
            .unwrap();

        let revision = store
            .update(
                USERS_COLLECTION,
                "uid-1",
                doc(json!({ "favorites": [{ "imdbID": "tt001" }] })),
                None,
            )
            .await
            .unwrap();
        assert_eq!(revision, 2);

        let stored = store.get(USERS_COLLECTION, "uid-1").await.unwrap().unwrap();
        assert_eq!(stored.data["firstName"], "Ada");
        assert_eq!(stored.data["favorites"][0]["imdbID"], "tt001");
        assert_eq!(stored.revision, 2);
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store = store();
        let err = store
            .update(USERS_COLLECTION, "nobody", Document::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_with_stale_revision_conflicts() {
        let store = store();
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "favorites": [] })))
            .await
            .unwrap();
        store
            .update(USERS_COLLECTION, "uid-1", doc(json!({ "x": 1 })), Some(1))
            .await
            .unwrap();

        let err = store
            .update(USERS_COLLECTION, "uid-1", doc(json!({ "x": 2 })), Some(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { expected: 1, actual: 2 }));

        let stored = store.get(USERS_COLLECTION, "uid-1").await.unwrap().unwrap();
        assert_eq!(stored.data["x"], 1);
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        let store = store();
        store
            .set("other", "uid-1", doc(json!({ "a": 1 })))
            .await
            .unwrap();
        assert!(store.get(USERS_COLLECTION, "uid-1").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_on_file_pool_all_commit() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("documents.db")).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        let store = Arc::new(SqliteDocumentStore::new(Arc::new(pool)));
        store
            .set(USERS_COLLECTION, "uid-1", doc(json!({ "favorites": [] })))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for i in 0..24 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                // Read first, as a favorites write does
                store.get(USERS_COLLECTION, "uid-1").await.unwrap();
                store
                    .update(
                        USERS_COLLECTION,
                        "uid-1",
                        doc(json!({ "favorites": [{ "imdbID": format!("tt{:03}", i) }] })),
                        None,
                    )
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = store.get(USERS_COLLECTION, "uid-1").await.unwrap().unwrap();
        assert_eq!(stored.revision, 25);
        assert_eq!(stored.data["favorites"].as_array().unwrap().len(), 1);
    }
}
