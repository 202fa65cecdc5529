// src/integrations/api/traits.rs
//
// Seams between the services and the backend. `ApiClient` implements all
// three; tests mock them.

use async_trait::async_trait;

use crate::domain::{
    AdminStats, ContentType, ContentUpdate, CulturalContent, MessageResponse, NewAccount,
    NewContent, NewPromotion, NewRegion, ProfileUpdate, Promotion, PromotionType,
    PromotionUpdate, Region, RegionUpdate, ReportReason, ReportReceipt, User, UserAdminUpdate,
};
use crate::error::AppResult;
use crate::integrations::api::wire::LoginResponse;

/// Where the client reads the bearer token from
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;

    /// Called when the backend rejects the token (HTTP 401)
    fn clear_token(&self);
}

/// Query filters for `GET /contenus/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub type_contenu: Option<ContentType>,
    pub featured: Option<bool>,
    pub region_id: Option<i64>,
}

impl ContentFilter {
    pub fn by_type(content_type: ContentType) -> Self {
        Self { type_contenu: Some(content_type), ..Default::default() }
    }

    pub fn featured() -> Self {
        Self { featured: Some(true), ..Default::default() }
    }

    pub fn by_region(region_id: i64) -> Self {
        Self { region_id: Some(region_id), ..Default::default() }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.type_contenu {
            pairs.push(("type_contenu", t.as_str().to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        if let Some(region_id) = self.region_id {
            pairs.push(("region_id", region_id.to_string()));
        }
        pairs
    }
}

/// Public catalogue and the signed-in user's interactions with it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_contents(&self, filter: ContentFilter) -> AppResult<Vec<CulturalContent>>;
    async fn get_content(&self, id: i64) -> AppResult<CulturalContent>;
    async fn recommendations(&self) -> AppResult<Vec<CulturalContent>>;
    async fn my_contributions(&self) -> AppResult<Vec<CulturalContent>>;
    async fn create_content(&self, content: &NewContent) -> AppResult<CulturalContent>;
    async fn update_content(&self, id: i64, update: &ContentUpdate) -> AppResult<CulturalContent>;
    async fn delete_content(&self, id: i64) -> AppResult<MessageResponse>;
    async fn like_content(&self, id: i64) -> AppResult<()>;

    async fn list_regions(&self) -> AppResult<Vec<Region>>;
    async fn get_region(&self, id: i64) -> AppResult<Region>;

    async fn list_favorites(&self) -> AppResult<Vec<CulturalContent>>;
    async fn add_favorite(&self, content_id: i64) -> AppResult<()>;
    async fn remove_favorite(&self, content_id: i64) -> AppResult<()>;

    async fn report_content(&self, content_id: i64, reason: ReportReason) -> AppResult<ReportReceipt>;

    async fn list_promotions(
        &self,
        promotion_type: Option<PromotionType>,
        featured: Option<bool>,
    ) -> AppResult<Vec<Promotion>>;
    async fn get_promotion(&self, id: i64) -> AppResult<Promotion>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse>;
    async fn register(&self, account: &NewAccount) -> AppResult<User>;
    async fn me(&self) -> AppResult<User>;
    async fn update_me(&self, update: &ProfileUpdate) -> AppResult<User>;
    /// Flags the account as premium after a payment
    async fn set_premium(&self, user_id: i64, premium: bool) -> AppResult<User>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn stats(&self) -> AppResult<AdminStats>;

    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn update_user(&self, id: i64, update: &UserAdminUpdate) -> AppResult<User>;
    /// Deactivates the account; the backend never hard-deletes users
    async fn deactivate_user(&self, id: i64) -> AppResult<MessageResponse>;

    async fn list_all_contents(&self) -> AppResult<Vec<CulturalContent>>;
    async fn toggle_published(&self, id: i64) -> AppResult<CulturalContent>;
    async fn toggle_featured(&self, id: i64) -> AppResult<CulturalContent>;
    async fn remove_content(&self, id: i64) -> AppResult<MessageResponse>;

    async fn list_all_regions(&self) -> AppResult<Vec<Region>>;
    async fn create_region(&self, region: &NewRegion) -> AppResult<Region>;
    async fn update_region(&self, id: i64, update: &RegionUpdate) -> AppResult<Region>;
    async fn delete_region(&self, id: i64) -> AppResult<MessageResponse>;

    async fn list_all_promotions(&self) -> AppResult<Vec<Promotion>>;
    async fn create_promotion(&self, promotion: &NewPromotion) -> AppResult<Promotion>;
    async fn update_promotion(&self, id: i64, update: &PromotionUpdate) -> AppResult<Promotion>;
    async fn delete_promotion(&self, id: i64) -> AppResult<MessageResponse>;
}
