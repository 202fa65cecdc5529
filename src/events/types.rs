// events/types.rs
//
// Facts announced by the services.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Plan;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    fn event_id(&self) -> Uuid;
    fn occurred_at(&self) -> DateTime<Utc>;
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($ty) }
        }
    };
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Account,
    LocalProfile,
}

/// Emitted after a login, a registration, a restored session or a new local profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: SessionKind,
    pub display_name: String,
}

impl SessionStarted {
    pub fn new(kind: SessionKind, display_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            display_name,
        }
    }
}

impl_domain_event!(SessionStarted);

/// Emitted when the session is torn down (logout or rejected token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl SessionEnded {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason: reason.into(),
        }
    }
}

impl_domain_event!(SessionEnded);

/// Emitted when a premium plan was paid for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumActivated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub plan: Plan,
    /// False when the backend could not be told
    pub synced: bool,
}

impl PremiumActivated {
    pub fn new(plan: Plan, synced: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            plan,
            synced,
        }
    }
}

impl_domain_event!(PremiumActivated);

// ============================================================================
// CONTENT EVENTS
// ============================================================================

/// Emitted after a contribution was accepted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub content_id: i64,
    pub titre: String,
}

impl ContentCreated {
    pub fn new(content_id: i64, titre: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            content_id,
            titre,
        }
    }
}

impl_domain_event!(ContentCreated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentReported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub content_id: i64,
    pub nb_signalements: u32,
    pub local: bool,
}

impl ContentReported {
    pub fn new(content_id: i64, nb_signalements: u32, local: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            content_id,
            nb_signalements,
            local,
        }
    }
}

impl_domain_event!(ContentReported);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoritesChange {
    Added,
    Removed,
}

/// Emitted for favorite additions and removals, remote or local
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub content_ids: Vec<i64>,
    pub change: FavoritesChange,
    pub local: bool,
}

impl FavoritesChanged {
    pub fn new(content_ids: Vec<i64>, change: FavoritesChange, local: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            content_ids,
            change,
            local,
        }
    }
}

impl_domain_event!(FavoritesChanged);

// ============================================================================
// RESOLUTION EVENTS
// ============================================================================

/// Emitted when a value was served from the cache or the static dataset
/// instead of the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackServed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cache_key: Option<String>,
    /// "cache" or "static"
    pub tier: String,
}

impl FallbackServed {
    pub fn new(cache_key: Option<String>, tier: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cache_key,
            tier: tier.into(),
        }
    }
}

impl_domain_event!(FallbackServed);
