// src/integrations/api/client.rs
//
// IvoCulture backend client
//
// ARCHITECTURE:
// - JSON over HTTP, bearer token read from a TokenProvider on every request
// - HTTP 401 clears the stored token
// - Records are validated here, before any service sees them
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never caches, never falls back; that is the resolver's job

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{
    normalize_region, validate_content, validate_promotion, validate_region, validate_user,
    AdminStats, ContentUpdate, CulturalContent, DomainResult, MessageResponse, NewAccount,
    NewContent, NewPromotion, NewRegion, ProfileUpdate, Promotion, PromotionType,
    PromotionUpdate, Region, RegionUpdate, ReportReason, ReportReceipt, User, UserAdminUpdate,
};
use crate::error::{AppError, AppResult};
use crate::integrations::api::traits::{AccountApi, AdminApi, CatalogApi, ContentFilter, TokenProvider};
use crate::integrations::api::wire::{
    ErrorBody, InteractionRequest, LoginForm, LoginResponse, PremiumPatch, ReportRequest,
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Records that are checked before leaving the client
pub(crate) trait BackendRecord: DeserializeOwned {
    const KIND: &'static str;

    fn validate(&self) -> DomainResult<()>;

    fn normalize(self) -> Self {
        self
    }
}

impl BackendRecord for CulturalContent {
    const KIND: &'static str = "content";

    fn validate(&self) -> DomainResult<()> {
        validate_content(self)
    }
}

impl BackendRecord for Region {
    const KIND: &'static str = "region";

    fn validate(&self) -> DomainResult<()> {
        validate_region(self)
    }

    fn normalize(self) -> Self {
        normalize_region(self)
    }
}

impl BackendRecord for Promotion {
    const KIND: &'static str = "promotion";

    fn validate(&self) -> DomainResult<()> {
        validate_promotion(self)
    }
}

impl BackendRecord for User {
    const KIND: &'static str = "user";

    fn validate(&self) -> DomainResult<()> {
        validate_user(self)
    }
}

/// Decode a single record; any defect fails the call
pub(crate) fn decode_record<T: BackendRecord>(value: serde_json::Value) -> AppResult<T> {
    let record = serde_json::from_value::<T>(value)?.normalize();
    record.validate()?;
    Ok(record)
}

/// Decode a list, keeping the valid items and dropping the rest
pub(crate) fn decode_list<T: BackendRecord>(value: serde_json::Value) -> AppResult<Vec<T>> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(AppError::Validation(format!(
                "Expected a list of {}s, got {}",
                T::KIND,
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match decode_record::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Dropping invalid {} at index {}: {}", T::KIND, idx, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        log::debug!("Kept {}/{} {} records", records.len(), total, T::KIND);
    }

    Ok(records)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

/// HTTP client for the IvoCulture REST backend
pub struct ApiClient {
    base_url: String,
    http_client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, tokens: Arc<dyn TokenProvider>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .http_client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json");

        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Backend rejected the session token, clearing it");
            self.tokens.clear_token();
            return Err(AppError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message())
            .unwrap_or(body);

        Err(match status {
            StatusCode::FORBIDDEN => AppError::Forbidden(message),
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::Http {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn json_value(&self, request: RequestBuilder) -> AppResult<serde_json::Value> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn get_list<T: BackendRecord>(&self, path: &str, query: &[(&str, String)]) -> AppResult<Vec<T>> {
        let value = self.json_value(self.request(Method::GET, path).query(query)).await?;
        decode_list(value)
    }

    async fn get_record<T: BackendRecord>(&self, path: &str) -> AppResult<T> {
        decode_record(self.json_value(self.request(Method::GET, path)).await?)
    }

    async fn send_record<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> AppResult<T>
    where
        T: BackendRecord,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode_record(self.json_value(request).await?)
    }

    async fn send_plain<T: DeserializeOwned>(&self, method: Method, path: &str) -> AppResult<T> {
        let response = self.send(self.request(method, path)).await?;
        Ok(response.json().await?)
    }

    async fn send_ignored<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> AppResult<()> {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await?;
        Ok(())
    }
}

// ============================================================================
// CATALOGUE
// ============================================================================

#[async_trait]
impl CatalogApi for ApiClient {
    async fn list_contents(&self, filter: ContentFilter) -> AppResult<Vec<CulturalContent>> {
        self.get_list("/contenus/", &filter.query_pairs()).await
    }

    async fn get_content(&self, id: i64) -> AppResult<CulturalContent> {
        self.get_record(&format!("/contenus/{}", id)).await
    }

    async fn recommendations(&self) -> AppResult<Vec<CulturalContent>> {
        self.get_list("/recommandations/", &[]).await
    }

    async fn my_contributions(&self) -> AppResult<Vec<CulturalContent>> {
        self.get_list("/contenus/mes-contributions", &[]).await
    }

    async fn create_content(&self, content: &NewContent) -> AppResult<CulturalContent> {
        self.send_record(Method::POST, "/contenus/", Some(content)).await
    }

    async fn update_content(&self, id: i64, update: &ContentUpdate) -> AppResult<CulturalContent> {
        self.send_record(Method::PUT, &format!("/contenus/{}", id), Some(update)).await
    }

    async fn delete_content(&self, id: i64) -> AppResult<MessageResponse> {
        self.send_plain(Method::DELETE, &format!("/contenus/{}", id)).await
    }

    async fn like_content(&self, id: i64) -> AppResult<()> {
        let body = InteractionRequest {
            contenu_id: id,
            type_interaction: "LIKE",
        };
        self.send_ignored(Method::POST, "/interactions/", Some(&body)).await
    }

    async fn list_regions(&self) -> AppResult<Vec<Region>> {
        self.get_list("/regions/", &[]).await
    }

    async fn get_region(&self, id: i64) -> AppResult<Region> {
        self.get_record(&format!("/regions/{}", id)).await
    }

    async fn list_favorites(&self) -> AppResult<Vec<CulturalContent>> {
        self.get_list("/favoris/", &[]).await
    }

    async fn add_favorite(&self, content_id: i64) -> AppResult<()> {
        self.send_ignored::<()>(Method::POST, &format!("/favoris/{}", content_id), None)
            .await
    }

    async fn remove_favorite(&self, content_id: i64) -> AppResult<()> {
        self.send_ignored::<()>(Method::DELETE, &format!("/favoris/{}", content_id), None)
            .await
    }

    async fn report_content(&self, content_id: i64, reason: ReportReason) -> AppResult<ReportReceipt> {
        let request = self
            .request(Method::POST, &format!("/signalements/contenu/{}", content_id))
            .json(&ReportRequest { motif: reason });
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn list_promotions(
        &self,
        promotion_type: Option<PromotionType>,
        featured: Option<bool>,
    ) -> AppResult<Vec<Promotion>> {
        let mut query = Vec::new();
        if let Some(t) = promotion_type {
            query.push(("type_promotion", t.as_str().to_string()));
        }
        if let Some(featured) = featured {
            query.push(("featured", featured.to_string()));
        }
        self.get_list("/promotions/", &query).await
    }

    async fn get_promotion(&self, id: i64) -> AppResult<Promotion> {
        self.get_record(&format!("/promotions/{}", id)).await
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[async_trait]
impl AccountApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let request = self
            .request(Method::POST, "/auth/login")
            .form(&LoginForm { username: email, password });
        let value = self.json_value(request).await?;

        let login: LoginResponse = serde_json::from_value(value)?;
        validate_user(&login.user)?;
        Ok(login)
    }

    async fn register(&self, account: &NewAccount) -> AppResult<User> {
        self.send_record(Method::POST, "/auth/register", Some(account)).await
    }

    async fn me(&self) -> AppResult<User> {
        self.get_record("/profil/moi").await
    }

    async fn update_me(&self, update: &ProfileUpdate) -> AppResult<User> {
        self.send_record(Method::PATCH, "/profil/moi", Some(update)).await
    }

    async fn set_premium(&self, user_id: i64, premium: bool) -> AppResult<User> {
        let body = PremiumPatch { is_premium: premium };
        self.send_record(Method::PATCH, &format!("/admin/utilisateurs/{}", user_id), Some(&body))
            .await
    }
}

// ============================================================================
// ADMIN
// ============================================================================

#[async_trait]
impl AdminApi for ApiClient {
    async fn stats(&self) -> AppResult<AdminStats> {
        self.send_plain(Method::GET, "/admin/stats").await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.get_list("/admin/utilisateurs", &[("limit", "100".to_string())]).await
    }

    async fn update_user(&self, id: i64, update: &UserAdminUpdate) -> AppResult<User> {
        self.send_record(Method::PATCH, &format!("/admin/utilisateurs/{}", id), Some(update))
            .await
    }

    async fn deactivate_user(&self, id: i64) -> AppResult<MessageResponse> {
        self.send_plain(Method::DELETE, &format!("/admin/utilisateurs/{}", id)).await
    }

    async fn list_all_contents(&self) -> AppResult<Vec<CulturalContent>> {
        self.get_list("/admin/contenus", &[("limit", "100".to_string())]).await
    }

    async fn toggle_published(&self, id: i64) -> AppResult<CulturalContent> {
        self.send_record::<_, ()>(Method::PATCH, &format!("/admin/contenus/{}/publier", id), None)
            .await
    }

    async fn toggle_featured(&self, id: i64) -> AppResult<CulturalContent> {
        self.send_record::<_, ()>(Method::PATCH, &format!("/admin/contenus/{}/featured", id), None)
            .await
    }

    async fn remove_content(&self, id: i64) -> AppResult<MessageResponse> {
        self.send_plain(Method::DELETE, &format!("/admin/contenus/{}", id)).await
    }

    async fn list_all_regions(&self) -> AppResult<Vec<Region>> {
        self.get_list("/admin/regions", &[]).await
    }

    async fn create_region(&self, region: &NewRegion) -> AppResult<Region> {
        self.send_record(Method::POST, "/admin/regions", Some(region)).await
    }

    async fn update_region(&self, id: i64, update: &RegionUpdate) -> AppResult<Region> {
        self.send_record(Method::PATCH, &format!("/admin/regions/{}", id), Some(update))
            .await
    }

    async fn delete_region(&self, id: i64) -> AppResult<MessageResponse> {
        self.send_plain(Method::DELETE, &format!("/admin/regions/{}", id)).await
    }

    async fn list_all_promotions(&self) -> AppResult<Vec<Promotion>> {
        self.get_list("/admin/promotions", &[]).await
    }

    async fn create_promotion(&self, promotion: &NewPromotion) -> AppResult<Promotion> {
        self.send_record(Method::POST, "/admin/promotions", Some(promotion)).await
    }

    async fn update_promotion(&self, id: i64, update: &PromotionUpdate) -> AppResult<Promotion> {
        self.send_record(Method::PATCH, &format!("/admin/promotions/{}", id), Some(update))
            .await
    }

    async fn delete_promotion(&self, id: i64) -> AppResult<MessageResponse> {
        self.send_plain(Method::DELETE, &format!("/admin/promotions/{}", id)).await
    }
}
