// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Favorites
    FavoriteAdded,
    FavoriteAlreadyPresent,
    FavoriteRemoved,
    // Search
    TitlesSearched,
    // Identity
    UserSignedIn,
    UserSignedOut,
    UserSignedUp,
};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
