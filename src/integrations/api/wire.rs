// src/integrations/api/wire.rs
//
// Request and response bodies that only exist on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{ReportReason, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct InteractionRequest {
    pub contenu_id: i64,
    pub type_interaction: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportRequest {
    pub motif: ReportReason,
}

#[derive(Debug, Serialize)]
pub(crate) struct PremiumPatch {
    pub is_premium: bool,
}

/// FastAPI error body
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
