// src/application/commands/admin_commands.rs
//
// Back-office commands. Admin rights are checked by the service.

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{
    AdminStats, CulturalContent, MessageResponse, NewPromotion, NewRegion, Promotion,
    PromotionUpdate, Region, RegionUpdate, User, UserAdminUpdate,
};

pub async fn admin_stats(state: &AppState) -> Result<AdminStats, String> {
    state.admin_service.stats().await.to_error_response()
}

pub async fn admin_list_users(state: &AppState) -> Result<Vec<User>, String> {
    state.admin_service.users().await.to_error_response()
}

pub async fn admin_update_user(
    state: &AppState,
    id: i64,
    update: UserAdminUpdate,
) -> Result<User, String> {
    state.admin_service.update_user(id, update).await.to_error_response()
}

pub async fn admin_deactivate_user(state: &AppState, id: i64) -> Result<MessageResponse, String> {
    state.admin_service.deactivate_user(id).await.to_error_response()
}

pub async fn admin_list_contents(state: &AppState) -> Result<Vec<CulturalContent>, String> {
    state.admin_service.contents().await.to_error_response()
}

pub async fn admin_toggle_published(state: &AppState, id: i64) -> Result<CulturalContent, String> {
    state.admin_service.toggle_published(id).await.to_error_response()
}

pub async fn admin_toggle_featured(state: &AppState, id: i64) -> Result<CulturalContent, String> {
    state.admin_service.toggle_featured(id).await.to_error_response()
}

pub async fn admin_delete_content(state: &AppState, id: i64) -> Result<MessageResponse, String> {
    state.admin_service.delete_content(id).await.to_error_response()
}

pub async fn admin_list_regions(state: &AppState) -> Result<Vec<Region>, String> {
    state.admin_service.regions().await.to_error_response()
}

pub async fn admin_create_region(state: &AppState, region: NewRegion) -> Result<Region, String> {
    state.admin_service.create_region(region).await.to_error_response()
}

pub async fn admin_update_region(
    state: &AppState,
    id: i64,
    update: RegionUpdate,
) -> Result<Region, String> {
    state.admin_service.update_region(id, update).await.to_error_response()
}

pub async fn admin_delete_region(state: &AppState, id: i64) -> Result<MessageResponse, String> {
    state.admin_service.delete_region(id).await.to_error_response()
}

pub async fn admin_list_promotions(state: &AppState) -> Result<Vec<Promotion>, String> {
    state.admin_service.promotions().await.to_error_response()
}

pub async fn admin_create_promotion(
    state: &AppState,
    promotion: NewPromotion,
) -> Result<Promotion, String> {
    state.admin_service.create_promotion(promotion).await.to_error_response()
}

pub async fn admin_update_promotion(
    state: &AppState,
    id: i64,
    update: PromotionUpdate,
) -> Result<Promotion, String> {
    state.admin_service.update_promotion(id, update).await.to_error_response()
}

pub async fn admin_delete_promotion(state: &AppState, id: i64) -> Result<MessageResponse, String> {
    state.admin_service.delete_promotion(id).await.to_error_response()
}
