// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// IDENTITY EVENTS
// ============================================================================

/// Emitted after an account is created and its profile document written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedUp {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub email: String,
}

impl UserSignedUp {
    pub fn new(user_id: String, email: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            email,
        }
    }
}

domain_event!(UserSignedUp);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
}

impl UserSignedIn {
    pub fn new(user_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

domain_event!(UserSignedIn);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignedOut {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
}

impl UserSignedOut {
    pub fn new(user_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

domain_event!(UserSignedOut);

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted after the favorites list with the new entry was written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub external_id: String,
    pub title: String,
}

impl FavoriteAdded {
    pub fn new(user_id: String, external_id: String, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            external_id,
            title,
        }
    }
}

domain_event!(FavoriteAdded);

/// Emitted when an add was skipped because the title is already a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAlreadyPresent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub external_id: String,
    pub title: String,
}

impl FavoriteAlreadyPresent {
    pub fn new(user_id: String, external_id: String, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            external_id,
            title,
        }
    }
}

domain_event!(FavoriteAlreadyPresent);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub external_id: String,
}

impl FavoriteRemoved {
    pub fn new(user_id: String, external_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            external_id,
        }
    }
}

domain_event!(FavoriteRemoved);

// ============================================================================
// SEARCH EVENTS
// ============================================================================

/// Emitted when the metadata provider answered a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitlesSearched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term: String,
    pub result_count: usize,
}

impl TitlesSearched {
    pub fn new(term: String, result_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term,
            result_count,
        }
    }
}

domain_event!(TitlesSearched);
