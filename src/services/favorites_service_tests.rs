// src/services/favorites_service_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::cache::Provenance;
    use crate::error::AppError;
    use crate::integrations::MockCatalogApi;
    use crate::repositories::{FavoritesRepository, MockFavoritesRepository};
    use crate::services::favorites_service::{FavoritesService, StorageTier};
    use crate::services::test_support::{content, offline, server_error, Harness};

    fn service(harness: &Harness, api: MockCatalogApi) -> FavoritesService {
        FavoritesService::new(
            Arc::new(api),
            harness.favorites.clone(),
            harness.resolver.clone(),
            harness.event_bus.clone(),
        )
    }

    fn service_with_local(
        harness: &Harness,
        api: MockCatalogApi,
        local: MockFavoritesRepository,
    ) -> FavoritesService {
        FavoritesService::new(
            Arc::new(api),
            Arc::new(local),
            harness.resolver.clone(),
            harness.event_bus.clone(),
        )
    }

    #[tokio::test]
    async fn test_add_goes_to_backend_when_reachable() {
        let harness = Harness::signed_in(false);
        let mut api = MockCatalogApi::new();
        api.expect_add_favorite().times(1).returning(|_| Ok(()));
        let favorites = service(&harness, api);

        assert_eq!(favorites.add(3).await.unwrap(), StorageTier::Remote);
        assert!(harness.favorites.list_ids().unwrap().is_empty());
        assert_eq!(harness.emitted("FavoritesChanged"), 1);
    }

    #[tokio::test]
    async fn test_add_offline_saves_locally_once() {
        let harness = Harness::new();
        let mut api = MockCatalogApi::new();
        api.expect_add_favorite().returning(|_| Err(offline()));
        let favorites = service(&harness, api);

        assert_eq!(favorites.add(3).await.unwrap(), StorageTier::Local);
        assert_eq!(favorites.add(3).await.unwrap(), StorageTier::Local);
        assert_eq!(harness.favorites.list_ids().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn test_add_falls_back_on_server_error_and_missing_auth() {
        let harness = Harness::new();
        let mut api = MockCatalogApi::new();
        api.expect_add_favorite()
            .withf(|id| *id == 1)
            .returning(|_| Err(server_error()));
        api.expect_add_favorite()
            .withf(|id| *id == 2)
            .returning(|_| Err(AppError::Unauthorized));
        let favorites = service(&harness, api);

        assert_eq!(favorites.add(1).await.unwrap(), StorageTier::Local);
        assert_eq!(favorites.add(2).await.unwrap(), StorageTier::Local);
        assert_eq!(harness.favorites.list_ids().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_explicit_rejection_is_not_saved_locally() {
        let harness = Harness::signed_in(false);
        let mut api = MockCatalogApi::new();
        api.expect_add_favorite().returning(|_| Err(AppError::NotFound));
        let favorites = service(&harness, api);

        assert!(matches!(favorites.add(404).await, Err(AppError::NotFound)));
        assert!(harness.favorites.list_ids().unwrap().is_empty());
        assert_eq!(harness.emitted("FavoritesChanged"), 0);
    }

    #[tokio::test]
    async fn test_offline_list_maps_local_ids_through_static_catalogue() {
        let harness = Harness::new();
        harness.favorites.add(4).unwrap();
        harness.favorites.add(777).unwrap();
        harness.favorites.add(1).unwrap();
        let mut api = MockCatalogApi::new();
        api.expect_list_favorites().returning(|| Err(offline()));
        let favorites = service(&harness, api);

        let resolved = favorites.favorites().await;

        assert_eq!(resolved.provenance, Provenance::Static);
        let ids: Vec<i64> = resolved.value.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[tokio::test]
    async fn test_live_list_is_cached_for_next_offline_read() {
        let harness = Harness::signed_in(false);
        let mut api = MockCatalogApi::new();
        let mut online = true;
        api.expect_list_favorites().returning(move || {
            let result = if online {
                Ok(vec![content(50, "Danse Zaouli")])
            } else {
                Err(offline())
            };
            online = false;
            result
        });
        let favorites = service(&harness, api);

        assert_eq!(favorites.favorites().await.provenance, Provenance::Remote);
        let second = favorites.favorites().await;
        assert_eq!(second.provenance, Provenance::Cache);
        assert_eq!(second.value[0].id, 50);
    }

    #[tokio::test]
    async fn test_remove_many_splits_by_tier() {
        let harness = Harness::new();
        harness.favorites.add(2).unwrap();
        let mut api = MockCatalogApi::new();
        api.expect_remove_favorite()
            .withf(|id| *id == 1)
            .returning(|_| Ok(()));
        api.expect_remove_favorite()
            .withf(|id| *id == 2)
            .returning(|_| Err(offline()));
        api.expect_remove_favorite()
            .withf(|id| *id == 3)
            .returning(|_| Err(AppError::Forbidden("not yours".to_string())));
        let favorites = service(&harness, api);

        let outcome = favorites.remove_many(&[1, 2, 3]).await.unwrap();

        assert_eq!(outcome.remote, vec![1]);
        assert_eq!(outcome.local, vec![2]);
        assert!(harness.favorites.list_ids().unwrap().is_empty());
        assert_eq!(harness.emitted("FavoritesChanged"), 2);
    }

    #[tokio::test]
    async fn test_live_list_does_not_touch_local_store() {
        let harness = Harness::signed_in(false);
        let mut api = MockCatalogApi::new();
        api.expect_list_favorites()
            .returning(|| Ok(vec![content(50, "Danse Zaouli")]));
        let mut local = MockFavoritesRepository::new();
        local.expect_list_ids().never();
        let favorites = service_with_local(&harness, api, local);

        let resolved = favorites.favorites().await;

        assert_eq!(resolved.provenance, Provenance::Remote);
        assert_eq!(resolved.value[0].id, 50);
    }

    #[tokio::test]
    async fn test_remove_many_deletes_local_ids_in_one_batch() {
        let harness = Harness::new();
        let mut api = MockCatalogApi::new();
        api.expect_remove_favorite()
            .withf(|id| *id == 1)
            .returning(|_| Ok(()));
        api.expect_remove_favorite()
            .withf(|id| *id != 1)
            .returning(|_| Err(offline()));
        let mut local = MockFavoritesRepository::new();
        local.expect_remove().never();
        local
            .expect_remove_many()
            .withf(|ids| ids.iter().copied().eq([2, 4]))
            .times(1)
            .returning(|ids| Ok(ids.len()));
        let favorites = service_with_local(&harness, api, local);

        let outcome = favorites.remove_many(&[1, 2, 4]).await.unwrap();

        assert_eq!(outcome.remote, vec![1]);
        assert_eq!(outcome.local, vec![2, 4]);
        assert_eq!(harness.emitted("FavoritesChanged"), 2);
    }

    #[tokio::test]
    async fn test_remove_many_clears_every_offline_id_from_store() {
        let harness = Harness::new();
        for id in [2, 4, 6] {
            harness.favorites.add(id).unwrap();
        }
        let mut api = MockCatalogApi::new();
        api.expect_remove_favorite().returning(|_| Err(offline()));
        let favorites = service(&harness, api);

        let outcome = favorites.remove_many(&[2, 6]).await.unwrap();

        assert!(outcome.remote.is_empty());
        assert_eq!(outcome.local, vec![2, 6]);
        assert_eq!(harness.favorites.list_ids().unwrap(), vec![4]);
        assert_eq!(harness.emitted("FavoritesChanged"), 1);
    }
}
