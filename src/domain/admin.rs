// src/domain/admin.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dashboard totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_utilisateurs: i64,
    pub total_contenus: i64,
    pub total_regions: i64,
    pub total_interactions: i64,
    #[serde(default)]
    pub contenus_par_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub utilisateurs_premium: i64,
}

/// Generic acknowledgement returned by delete/deactivate endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}
