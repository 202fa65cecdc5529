// src/application/commands/catalog_commands.rs
//
// Catalogue Command Handlers
//
// RULES:
// - Reads never fail: they return the best tier available, with provenance
// - Writes surface the service error as a serialized ErrorResponse
// - No business logic here

use crate::application::dto::*;
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::{
    Category, ContentType, ContentUpdate, CulturalContent, MessageResponse, NewContent, Promotion,
    PromotionType, Region, ReportReason, ReportReceipt, CATEGORIES,
};

fn not_found(resource: &str) -> String {
    serde_json::to_string(&ErrorResponse::not_found(resource))
        .unwrap_or_else(|_| format!("{} not found", resource))
}

/// Turns an empty detail lookup into a not-found error
fn require_found<T>(
    resolved: ResolvedDto<Option<T>>,
    resource: &str,
) -> Result<ResolvedDto<T>, String> {
    match resolved.data {
        Some(data) => Ok(ResolvedDto {
            data,
            provenance: resolved.provenance,
            live: resolved.live,
        }),
        None => Err(not_found(resource)),
    }
}

// ============================================================================
// CONTENTS
// ============================================================================

/// Region wins over featured, featured over type
pub async fn list_contents(
    state: &AppState,
    content_type: Option<ContentType>,
    featured: bool,
    region_id: Option<i64>,
) -> ResolvedDto<Vec<CulturalContent>> {
    let service = &state.content_service;
    let resolved = match (region_id, featured, content_type) {
        (Some(region_id), _, _) => service.region_contents(region_id).await,
        (None, true, _) => service.featured_contents().await,
        (None, false, Some(content_type)) => service.contents_by_type(content_type).await,
        (None, false, None) => service.all_contents().await,
    };
    resolved.into()
}

pub async fn get_content(state: &AppState, id: i64) -> Result<ResolvedDto<CulturalContent>, String> {
    let resolved = state.content_service.content_detail(id).await;
    require_found(resolved.into(), "Content")
}

pub async fn search_contents(state: &AppState, query: &str) -> ResolvedDto<Vec<CulturalContent>> {
    state.content_service.search(query).await.into()
}

pub async fn recommendations(state: &AppState) -> ResolvedDto<Vec<CulturalContent>> {
    state.content_service.recommendations().await.into()
}

pub async fn contribution_history(state: &AppState) -> ResolvedDto<Vec<CulturalContent>> {
    state.content_service.contribution_history().await.into()
}

pub fn list_categories() -> Vec<Category> {
    CATEGORIES.to_vec()
}

pub async fn like_content(state: &AppState, id: i64) -> Result<(), String> {
    state.content_service.like(id).await.to_error_response()
}

pub async fn create_content(state: &AppState, draft: NewContent) -> Result<CulturalContent, String> {
    state.content_service.create(draft).await.to_error_response()
}

pub async fn update_content(
    state: &AppState,
    id: i64,
    update: ContentUpdate,
) -> Result<CulturalContent, String> {
    state.content_service.update(id, update).await.to_error_response()
}

pub async fn delete_content(state: &AppState, id: i64) -> Result<MessageResponse, String> {
    state.content_service.delete(id).await.to_error_response()
}

// ============================================================================
// REGIONS
// ============================================================================

pub async fn list_regions(state: &AppState) -> ResolvedDto<Vec<Region>> {
    state.region_service.regions().await.into()
}

pub async fn get_region(state: &AppState, id: i64) -> Result<ResolvedDto<Region>, String> {
    let resolved = state.region_service.region_detail(id).await;
    require_found(resolved.into(), "Region")
}

// ============================================================================
// PROMOTIONS
// ============================================================================

pub async fn list_promotions(
    state: &AppState,
    promotion_type: Option<PromotionType>,
    featured: bool,
) -> ResolvedDto<Vec<Promotion>> {
    if featured {
        state.promotion_service.featured_promotions().await.into()
    } else {
        state.promotion_service.promotions(promotion_type).await.into()
    }
}

pub async fn get_promotion(state: &AppState, id: i64) -> Result<ResolvedDto<Promotion>, String> {
    let resolved = state.promotion_service.promotion_detail(id).await;
    require_found(resolved.into(), "Promotion")
}

// ============================================================================
// FAVORITES & REPORTS
// ============================================================================

pub async fn list_favorites(state: &AppState) -> ResolvedDto<Vec<CulturalContent>> {
    state.favorites_service.favorites().await.into()
}

pub async fn add_favorite(state: &AppState, id: i64) -> Result<FavoriteChangeDto, String> {
    let stored = state.favorites_service.add(id).await.to_error_response()?;
    Ok(FavoriteChangeDto {
        content_ids: vec![id],
        stored,
    })
}

pub async fn remove_favorites(state: &AppState, ids: &[i64]) -> Result<BulkRemovalDto, String> {
    let outcome = state
        .favorites_service
        .remove_many(ids)
        .await
        .to_error_response()?;
    Ok(BulkRemovalDto::new(ids, outcome))
}

pub async fn report_content(
    state: &AppState,
    id: i64,
    reason: ReportReason,
) -> Result<ReportReceipt, String> {
    state.report_service.report(id, reason).await.to_error_response()
}
