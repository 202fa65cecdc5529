// src/services/admin_service_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{NewPromotion, NewRegion, PromotionType, PromotionUpdate};
    use crate::error::AppError;
    use crate::integrations::MockAdminApi;
    use crate::services::admin_service::AdminService;
    use crate::services::test_support::{user, Harness};

    fn service(harness: &Harness, api: MockAdminApi) -> AdminService {
        AdminService::new(Arc::new(api), harness.session.clone())
    }

    fn region(nom: &str, couleur: &str) -> NewRegion {
        NewRegion {
            nom: nom.to_string(),
            description: "Région de l'ouest".to_string(),
            image_url: String::new(),
            couleur_theme: couleur.to_string(),
            latitude: Some(7.41),
            longitude: Some(-7.55),
            population: None,
        }
    }

    #[tokio::test]
    async fn test_anonymous_caller_is_unauthorized() {
        let harness = Harness::new();
        let admin = service(&harness, MockAdminApi::new());

        assert!(matches!(admin.stats().await, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_regular_account_is_forbidden() {
        let harness = Harness::signed_in(false);
        let admin = service(&harness, MockAdminApi::new());

        assert!(matches!(admin.users().await, Err(AppError::Forbidden(_))));
        assert!(matches!(admin.toggle_featured(1).await, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_admin_lists_users() {
        let harness = Harness::signed_in(true);
        let mut api = MockAdminApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user(1, true), user(2, false)]));
        let admin = service(&harness, api);

        assert_eq!(admin.users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_admin_cannot_deactivate_self() {
        let harness = Harness::signed_in(true);
        let admin = service(&harness, MockAdminApi::new());

        assert!(matches!(
            admin.deactivate_user(7).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_region_payload_is_validated_first() {
        let harness = Harness::signed_in(true);
        let admin = service(&harness, MockAdminApi::new());

        assert!(admin.create_region(region("", "#FF8800")).await.is_err());
        assert!(admin.create_region(region("Tonkpi", "orange")).await.is_err());
    }

    #[tokio::test]
    async fn test_promotion_payload_is_validated_first() {
        let harness = Harness::signed_in(true);
        let mut api = MockAdminApi::new();
        api.expect_create_promotion().times(0);
        api.expect_update_promotion().times(0);
        let admin = service(&harness, api);

        let promotion = NewPromotion {
            titre: "Maquis Chez Tantie".to_string(),
            type_promotion: PromotionType::Touriste,
            description: "Garba et attiéké".to_string(),
            texte_complet: None,
            numero_contact: None,
            image_url: None,
            adresse: None,
            note_popularite: 180,
            is_featured: false,
        };
        assert!(admin.create_promotion(promotion).await.is_err());

        let update = PromotionUpdate {
            note_popularite: Some(101),
            ..Default::default()
        };
        assert!(admin.update_promotion(3, update).await.is_err());
    }
}
