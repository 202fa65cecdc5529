// src/services/region_service.rs
use std::sync::Arc;

use crate::cache::{CacheKey, Resolved, TieredResolver};
use crate::domain::Region;
use crate::fallback;
use crate::integrations::CatalogApi;

pub struct RegionService {
    catalog: Arc<dyn CatalogApi>,
    resolver: TieredResolver,
}

impl RegionService {
    pub fn new(catalog: Arc<dyn CatalogApi>, resolver: TieredResolver) -> Self {
        Self { catalog, resolver }
    }

    pub async fn regions(&self) -> Resolved<Vec<Region>> {
        self.resolver
            .resolve(self.catalog.list_regions(), Some(CacheKey::Regions), fallback::regions())
            .await
    }

    pub async fn region_detail(&self, id: i64) -> Resolved<Option<Region>> {
        let remote = async { self.catalog.get_region(id).await.map(Some) };
        self.resolver
            .resolve(remote, Some(CacheKey::RegionDetail(id)), fallback::region_by_id(id))
            .await
    }
}
