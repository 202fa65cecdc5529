// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - DTOs are what the presentation layer prints or sends
// - Every catalogue read carries the tier it came from
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};

use crate::cache::{Provenance, Resolved};
use crate::domain::{Plan, PremiumSubscription};
use crate::services::{BulkRemoval, Identity, SessionContext, StorageTier};

// ============================================================================
// RESOLVED READS
// ============================================================================

/// A value plus where it came from (`remote`, `cache` or `static`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDto<T> {
    pub data: T,
    pub provenance: Provenance,
    /// False when offline data was served
    pub live: bool,
}

impl<T> From<Resolved<T>> for ResolvedDto<T> {
    fn from(resolved: Resolved<T>) -> Self {
        Self {
            live: resolved.provenance.is_live(),
            provenance: resolved.provenance,
            data: resolved.value,
        }
    }
}

// ============================================================================
// SESSION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    /// `anonymous`, `account` or `local`
    pub kind: String,
    pub display_name: Option<String>,
    pub user_id: Option<i64>,
    pub is_admin: bool,
    pub is_premium: bool,
    pub subscription: Option<SubscriptionDto>,
}

impl From<&SessionContext> for SessionDto {
    fn from(session: &SessionContext) -> Self {
        let identity = session.identity();
        let (kind, user_id) = match &identity {
            Identity::Anonymous => ("anonymous", None),
            Identity::Account { user } => ("account", Some(user.id)),
            Identity::Local { .. } => ("local", None),
        };

        Self {
            kind: kind.to_string(),
            display_name: session.display_name(),
            user_id,
            is_admin: session.is_admin(),
            is_premium: session.is_premium(),
            subscription: session.subscription().map(SubscriptionDto::from),
        }
    }
}

// ============================================================================
// SUBSCRIPTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: String,
    pub label: String,
    pub price_fcfa: u32,
}

impl From<Plan> for PlanDto {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.as_str().to_string(),
            label: plan.label().to_string(),
            price_fcfa: plan.price_fcfa(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDto {
    pub actif: bool,
    pub plan: PlanDto,
    /// RFC 3339
    pub date: String,
}

impl From<PremiumSubscription> for SubscriptionDto {
    fn from(subscription: PremiumSubscription) -> Self {
        Self {
            actif: subscription.actif,
            plan: PlanDto::from(subscription.plan),
            date: subscription.date.to_rfc3339(),
        }
    }
}

// ============================================================================
// FAVORITES DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteChangeDto {
    pub content_ids: Vec<i64>,
    pub stored: StorageTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkRemovalDto {
    pub removed_remote: Vec<i64>,
    pub removed_local: Vec<i64>,
    pub failed: Vec<i64>,
}

impl BulkRemovalDto {
    pub fn new(requested: &[i64], outcome: BulkRemoval) -> Self {
        let failed = requested
            .iter()
            .copied()
            .filter(|id| !outcome.remote.contains(id) && !outcome.local.contains(id))
            .collect();
        Self {
            removed_remote: outcome.remote,
            removed_local: outcome.local,
            failed,
        }
    }
}
