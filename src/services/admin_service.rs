// src/services/admin_service.rs
//
// Back-office operations. Every call needs an admin session; the backend
// enforces the same rule, this only fails earlier.

use std::sync::Arc;

use crate::domain::{
    validate_new_promotion, validate_new_region, validate_promotion_update, AdminStats, CulturalContent, MessageResponse,
    NewPromotion, NewRegion, Promotion, PromotionUpdate, Region, RegionUpdate, User,
    UserAdminUpdate,
};
use crate::error::{AppError, AppResult};
use crate::integrations::AdminApi;
use crate::services::session::SessionContext;

pub struct AdminService {
    admin_api: Arc<dyn AdminApi>,
    session: Arc<SessionContext>,
}

impl AdminService {
    pub fn new(admin_api: Arc<dyn AdminApi>, session: Arc<SessionContext>) -> Self {
        Self { admin_api, session }
    }

    fn require_admin(&self) -> AppResult<()> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized);
        }
        if !self.session.is_admin() {
            return Err(AppError::Forbidden(
                "Administrator rights required".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn stats(&self) -> AppResult<AdminStats> {
        self.require_admin()?;
        self.admin_api.stats().await
    }

    // ========================================================================
    // USERS
    // ========================================================================

    pub async fn users(&self) -> AppResult<Vec<User>> {
        self.require_admin()?;
        self.admin_api.list_users().await
    }

    pub async fn update_user(&self, id: i64, update: UserAdminUpdate) -> AppResult<User> {
        self.require_admin()?;
        self.admin_api.update_user(id, &update).await
    }

    pub async fn deactivate_user(&self, id: i64) -> AppResult<MessageResponse> {
        self.require_admin()?;
        if self.session.current_user().map(|u| u.id) == Some(id) {
            return Err(AppError::Validation(
                "An administrator cannot deactivate their own account".to_string(),
            ));
        }
        self.admin_api.deactivate_user(id).await
    }

    // ========================================================================
    // CONTENTS
    // ========================================================================

    pub async fn contents(&self) -> AppResult<Vec<CulturalContent>> {
        self.require_admin()?;
        self.admin_api.list_all_contents().await
    }

    pub async fn toggle_published(&self, id: i64) -> AppResult<CulturalContent> {
        self.require_admin()?;
        self.admin_api.toggle_published(id).await
    }

    pub async fn toggle_featured(&self, id: i64) -> AppResult<CulturalContent> {
        self.require_admin()?;
        self.admin_api.toggle_featured(id).await
    }

    pub async fn delete_content(&self, id: i64) -> AppResult<MessageResponse> {
        self.require_admin()?;
        self.admin_api.remove_content(id).await
    }

    // ========================================================================
    // REGIONS
    // ========================================================================

    pub async fn regions(&self) -> AppResult<Vec<Region>> {
        self.require_admin()?;
        self.admin_api.list_all_regions().await
    }

    pub async fn create_region(&self, region: NewRegion) -> AppResult<Region> {
        self.require_admin()?;
        validate_new_region(&region)?;
        self.admin_api.create_region(&region).await
    }

    pub async fn update_region(&self, id: i64, update: RegionUpdate) -> AppResult<Region> {
        self.require_admin()?;
        self.admin_api.update_region(id, &update).await
    }

    pub async fn delete_region(&self, id: i64) -> AppResult<MessageResponse> {
        self.require_admin()?;
        self.admin_api.delete_region(id).await
    }

    // ========================================================================
    // PROMOTIONS
    // ========================================================================

    pub async fn promotions(&self) -> AppResult<Vec<Promotion>> {
        self.require_admin()?;
        self.admin_api.list_all_promotions().await
    }

    pub async fn create_promotion(&self, promotion: NewPromotion) -> AppResult<Promotion> {
        self.require_admin()?;
        validate_new_promotion(&promotion)?;
        self.admin_api.create_promotion(&promotion).await
    }

    pub async fn update_promotion(&self, id: i64, update: PromotionUpdate) -> AppResult<Promotion> {
        self.require_admin()?;
        validate_promotion_update(&update)?;
        self.admin_api.update_promotion(id, &update).await
    }

    pub async fn delete_promotion(&self, id: i64) -> AppResult<MessageResponse> {
        self.require_admin()?;
        self.admin_api.delete_promotion(id).await
    }
}
