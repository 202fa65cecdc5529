// src/services/favorites_service.rs
//
// Favorites live on the backend when it is reachable and in the
// local_favorites table when it is not.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, Resolved, TieredResolver};
use crate::domain::CulturalContent;
use crate::error::AppResult;
use crate::events::{EventBus, FavoritesChange, FavoritesChanged};
use crate::fallback;
use crate::integrations::CatalogApi;
use crate::repositories::FavoritesRepository;

/// Where a mutation ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Remote,
    Local,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRemoval {
    pub remote: Vec<i64>,
    pub local: Vec<i64>,
}

pub struct FavoritesService {
    catalog: Arc<dyn CatalogApi>,
    local: Arc<dyn FavoritesRepository>,
    resolver: TieredResolver,
    event_bus: Arc<EventBus>,
}

impl FavoritesService {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        local: Arc<dyn FavoritesRepository>,
        resolver: TieredResolver,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            local,
            resolver,
            event_bus,
        }
    }

    /// Backend list, then the cached list, then the locally saved ids
    /// looked up in the static catalogue, then nothing
    pub async fn favorites(&self) -> Resolved<Vec<CulturalContent>> {
        self.resolver
            .resolve_with(
                self.catalog.list_favorites(),
                Some(CacheKey::Favorites),
                || self.local_favorites(),
            )
            .await
    }

    fn local_favorites(&self) -> Vec<CulturalContent> {
        match self.local.list_ids() {
            Ok(ids) => fallback::contents_by_ids(&ids),
            Err(e) => {
                log::warn!("Local favorites unreadable: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn add(&self, content_id: i64) -> AppResult<StorageTier> {
        let tier = match self.catalog.add_favorite(content_id).await {
            Ok(()) => StorageTier::Remote,
            Err(e) if e.allows_local_fallback() => {
                log::info!("Saving favorite {} locally: {}", content_id, e);
                if !self.local.add(content_id)? {
                    log::debug!("Favorite {} already saved locally", content_id);
                }
                StorageTier::Local
            }
            Err(e) => return Err(e),
        };

        self.event_bus.emit(FavoritesChanged::new(
            vec![content_id],
            FavoritesChange::Added,
            tier == StorageTier::Local,
        ));
        Ok(tier)
    }

    pub async fn remove(&self, content_id: i64) -> AppResult<StorageTier> {
        let tier = self.remove_one(content_id).await?;
        self.event_bus.emit(FavoritesChanged::new(
            vec![content_id],
            FavoritesChange::Removed,
            tier == StorageTier::Local,
        ));
        Ok(tier)
    }

    /// Removes each id independently; one failure does not stop the rest.
    /// Ids the backend could not take are deleted locally in one batch.
    pub async fn remove_many(&self, content_ids: &[i64]) -> AppResult<BulkRemoval> {
        let mut outcome = BulkRemoval::default();

        for &id in content_ids {
            match self.catalog.remove_favorite(id).await {
                Ok(()) => outcome.remote.push(id),
                Err(e) if e.allows_local_fallback() => {
                    log::info!("Removing favorite {} locally: {}", id, e);
                    outcome.local.push(id);
                }
                Err(e) => log::warn!("Could not remove favorite {}: {}", id, e),
            }
        }

        if !outcome.local.is_empty() {
            match self.local.remove_many(&outcome.local) {
                Ok(removed) => log::debug!("Removed {} local favorites", removed),
                Err(e) => {
                    log::warn!("Could not remove local favorites {:?}: {}", outcome.local, e);
                    outcome.local.clear();
                }
            }
        }

        if !outcome.remote.is_empty() {
            self.event_bus.emit(FavoritesChanged::new(
                outcome.remote.clone(),
                FavoritesChange::Removed,
                false,
            ));
        }
        if !outcome.local.is_empty() {
            self.event_bus.emit(FavoritesChanged::new(
                outcome.local.clone(),
                FavoritesChange::Removed,
                true,
            ));
        }

        Ok(outcome)
    }

    async fn remove_one(&self, content_id: i64) -> AppResult<StorageTier> {
        match self.catalog.remove_favorite(content_id).await {
            Ok(()) => Ok(StorageTier::Remote),
            Err(e) if e.allows_local_fallback() => {
                log::info!("Removing favorite {} locally: {}", content_id, e);
                self.local.remove(content_id)?;
                Ok(StorageTier::Local)
            }
            Err(e) => Err(e),
        }
    }
}
