use serde::{Deserialize, Serialize};

use crate::domain::favorite::FavoriteEntry;

/// The per-user document held in the `users` collection.
///
/// Created on signup with an empty favorites list. Only favorites
/// synchronization mutates it afterwards; it is never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Identity key assigned by the identity provider; also the document id
    #[serde(skip)]
    pub user_id: String,

    pub first_name: String,

    pub last_name: String,

    /// Kept as text, the way the signup form submits it
    pub age: String,

    pub email: String,

    #[serde(default)]
    pub favorites: Vec<FavoriteEntry>,
}

impl UserProfile {
    /// Create the initial profile written right after account creation
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
            email: email.into(),
            favorites: Vec::new(),
        }
    }
}
