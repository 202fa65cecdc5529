// src/domain/mod.rs
//
// Domain Root - records mirrored from the backend, validated at the boundary.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod admin;
pub mod category;
pub mod content;
pub mod promotion;
pub mod region;
pub mod report;
pub mod subscription;
pub mod timestamps;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use admin::{AdminStats, MessageResponse};
pub use category::{category_for, find_category, Category, CATEGORIES};
pub use content::{
    validate_content, validate_content_update, validate_new_content, Author, ContentType,
    ContentUpdate, CulturalContent, NewContent,
};
pub use promotion::{
    validate_new_promotion, validate_promotion, validate_promotion_update, NewPromotion, Promotion, PromotionType,
    PromotionUpdate,
};
pub use region::{
    normalize_region, slugify, validate_new_region, validate_region, NewRegion, Region,
    RegionUpdate,
};
pub use report::{ReportReason, ReportReceipt};
pub use subscription::{validate_payment_method, PaymentMethod, Plan, PremiumSubscription};
pub use user::{
    validate_local_profile, validate_new_account, validate_user, LocalProfile, LocalProfileKind,
    NewAccount, ProfileUpdate, User, UserAdminUpdate, UserRole,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
