// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Content
    ContentCreated,
    ContentReported,
    // Resolution
    FallbackServed,
    FavoritesChange,
    FavoritesChanged,
    PremiumActivated,
    SessionEnded,
    SessionKind,
    // Session
    SessionStarted,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
