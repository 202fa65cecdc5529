// src/services/content_service.rs
//
// Catalogue reads go through the tiered resolver; contributions go straight
// to the backend.

use std::sync::Arc;

use crate::cache::{CacheKey, Resolved, TieredResolver};
use crate::domain::{
    validate_content_update, validate_new_content, ContentType, ContentUpdate, CulturalContent,
    MessageResponse, NewContent,
};
use crate::error::{AppError, AppResult};
use crate::events::{ContentCreated, EventBus};
use crate::fallback;
use crate::integrations::{CatalogApi, ContentFilter};
use crate::services::session::SessionContext;

pub struct ContentService {
    catalog: Arc<dyn CatalogApi>,
    resolver: TieredResolver,
    session: Arc<SessionContext>,
    event_bus: Arc<EventBus>,
}

impl ContentService {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        resolver: TieredResolver,
        session: Arc<SessionContext>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            session,
            event_bus,
        }
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub async fn contents_by_type(&self, content_type: ContentType) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.list_contents(ContentFilter::by_type(content_type)),
                Some(CacheKey::ContentsByType(content_type)),
                fallback::contents_by_type(content_type),
            )
            .await
    }

    pub async fn all_contents(&self) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.list_contents(ContentFilter::default()),
                Some(CacheKey::AllContents),
                fallback::contents(),
            )
            .await
    }

    pub async fn featured_contents(&self) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.list_contents(ContentFilter::featured()),
                Some(CacheKey::FeaturedContents),
                fallback::featured_contents(),
            )
            .await
    }

    /// `None` when no tier knows the id
    pub async fn content_detail(&self, id: i64) -> Resolved<Option<CulturalContent>> {
        let remote = async { self.catalog.get_content(id).await.map(Some) };
        self.resolver
            .resolve(remote, Some(CacheKey::ContentDetail(id)), fallback::content_by_id(id))
            .await
    }

    pub async fn recommendations(&self) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.recommendations(),
                Some(CacheKey::Recommendations),
                fallback::contents(),
            )
            .await
    }

    pub async fn region_contents(&self, region_id: i64) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.list_contents(ContentFilter::by_region(region_id)),
                Some(CacheKey::RegionContents(region_id)),
                fallback::contents_by_region(region_id),
            )
            .await
    }

    /// Case-insensitive match on title, description and tags over the
    /// resolved catalogue
    pub async fn search(&self, query: &str) -> Resolved<Vec<CulturalContent>> {
        let query = query.trim().to_string();
        self.all_contents().await.map(|contents| {
            contents
                .into_iter()
                .filter(|c| c.matches_query(&query))
                .collect()
        })
    }

    /// Backend history, then the cached history, then nothing
    pub async fn contribution_history(&self) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve(
                self.catalog.my_contributions(),
                Some(CacheKey::ContributionHistory),
                Vec::new(),
            )
            .await
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    pub async fn like(&self, id: i64) -> AppResult<()> {
        self.require_account()?;
        self.catalog.like_content(id).await
    }

    pub async fn create(&self, content: NewContent) -> AppResult<CulturalContent> {
        self.require_account()?;
        validate_new_content(&content)?;

        let created = self.catalog.create_content(&content).await?;

        let mut history: Vec<CulturalContent> = self
            .resolver
            .read_cached(&CacheKey::ContributionHistory)
            .await
            .unwrap_or_default();
        history.retain(|c| c.id != created.id);
        history.insert(0, created.clone());
        self.resolver
            .persist(&CacheKey::ContributionHistory, &history)
            .await;

        log::info!("Contribution {} published as #{}", created.titre, created.id);
        self.event_bus
            .emit(ContentCreated::new(created.id, created.titre.clone()));

        Ok(created)
    }

    pub async fn update(&self, id: i64, update: ContentUpdate) -> AppResult<CulturalContent> {
        self.require_account()?;
        validate_content_update(&update)?;

        let updated = self.catalog.update_content(id, &update).await?;
        self.resolver
            .persist(&CacheKey::ContentDetail(id), &Some(updated.clone()))
            .await;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<MessageResponse> {
        self.require_account()?;
        let response = self.catalog.delete_content(id).await?;

        let cleanup = self.resolver.store().remove(&CacheKey::ContentDetail(id)).await;
        if let Err(e) = cleanup {
            log::warn!("Failed to drop cached content {}: {}", id, e);
        }
        Ok(response)
    }

    fn require_account(&self) -> AppResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
