// src/services/promotion_service.rs
use std::sync::Arc;

use crate::cache::{CacheKey, Resolved, TieredResolver};
use crate::domain::{Promotion, PromotionType};
use crate::fallback;
use crate::integrations::CatalogApi;

pub struct PromotionService {
    catalog: Arc<dyn CatalogApi>,
    resolver: TieredResolver,
}

impl PromotionService {
    pub fn new(catalog: Arc<dyn CatalogApi>, resolver: TieredResolver) -> Self {
        Self { catalog, resolver }
    }

    /// Active promotions, optionally of one type
    pub async fn promotions(&self, promotion_type: Option<PromotionType>) -> Resolved<Vec<Promotion>> {
        self.resolver
            .resolve(
                self.catalog.list_promotions(promotion_type, None),
                Some(CacheKey::Promotions(promotion_type)),
                fallback::promotions_by_type(promotion_type),
            )
            .await
    }

    pub async fn featured_promotions(&self) -> Resolved<Vec<Promotion>> {
        self.resolver
            .resolve(
                self.catalog.list_promotions(None, Some(true)),
                Some(CacheKey::FeaturedPromotions),
                fallback::featured_promotions(),
            )
            .await
    }

    pub async fn promotion_detail(&self, id: i64) -> Resolved<Option<Promotion>> {
        let remote = async { self.catalog.get_promotion(id).await.map(Some) };
        self.resolver
            .resolve(remote, Some(CacheKey::PromotionDetail(id)), fallback::promotion_by_id(id))
            .await
    }
}
