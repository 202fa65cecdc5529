// src/application/commands/commands_tests.rs
//
// End-to-end command tests against a backend that is not running.

#[cfg(test)]
mod tests {
    use crate::application::commands::*;
    use crate::application::state::AppState;
    use crate::cache::Provenance;
    use crate::config::AppConfig;
    use crate::domain::{ContentType, LocalProfileKind, PaymentMethod, Plan, ReportReason};
    use crate::fallback;
    use crate::services::StorageTier;

    fn offline_state() -> AppState {
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            request_timeout_secs: 2,
            payment_delay_ms: 0,
            ..AppConfig::default()
        };
        AppState::in_memory(config).unwrap()
    }

    #[tokio::test]
    async fn test_offline_catalogue_is_static() {
        let state = offline_state();

        let all = list_contents(&state, None, false, None).await;
        assert_eq!(all.provenance, Provenance::Static);
        assert!(!all.live);
        assert_eq!(all.data, fallback::contents());

        let masks = list_contents(&state, Some(ContentType::Masque), false, None).await;
        assert!(masks.data.iter().all(|c| c.type_contenu == ContentType::Masque));

        let regions = list_regions(&state).await;
        assert_eq!(regions.data, fallback::regions());
    }

    #[tokio::test]
    async fn test_unknown_detail_is_not_found() {
        let state = offline_state();

        let err = get_content(&state, 4242).await.unwrap_err();
        assert!(err.contains("not_found"));

        let known = get_region(&state, 1).await.unwrap();
        assert_eq!(known.provenance, Provenance::Static);
    }

    #[tokio::test]
    async fn test_offline_favorite_round_trip() {
        let state = offline_state();

        let change = add_favorite(&state, 2).await.unwrap();
        assert_eq!(change.stored, StorageTier::Local);

        let favorites = list_favorites(&state).await;
        assert_eq!(favorites.data.len(), 1);
        assert_eq!(favorites.data[0].id, 2);

        let removal = remove_favorites(&state, &[2]).await.unwrap();
        assert_eq!(removal.removed_local, vec![2]);
        assert!(list_favorites(&state).await.data.is_empty());
    }

    #[tokio::test]
    async fn test_offline_report_is_local() {
        let state = offline_state();

        let receipt = report_content(&state, 3, ReportReason::Autre).await.unwrap();
        assert!(receipt.local);
        assert_eq!(receipt.nb_signalements, 1);
    }

    #[tokio::test]
    async fn test_login_offline_fails_and_session_stays_anonymous() {
        let state = offline_state();

        let err = login(&state, "awa@ivoculture.ci", "secret1").await.unwrap_err();
        assert!(err.contains("network"));
        assert_eq!(whoami(&state).kind, "anonymous");
    }

    #[tokio::test]
    async fn test_local_profile_then_subscription() {
        let state = offline_state();

        let session =
            start_local_profile(&state, "visiteur", None, LocalProfileKind::Touriste).unwrap();
        assert_eq!(session.kind, "local");
        assert!(!session.is_premium);

        let subscription = subscribe(&state, Plan::Annuel, PaymentMethod::Card).await.unwrap();
        assert!(subscription.actif);
        assert!(whoami(&state).is_premium);

        let after_cancel = cancel_subscription(&state).unwrap();
        assert!(!after_cancel.is_premium);
    }

    #[tokio::test]
    async fn test_admin_commands_need_account() {
        let state = offline_state();

        let err = admin_stats(&state).await.unwrap_err();
        assert!(err.contains("unauthorized"));
    }

    #[tokio::test]
    async fn test_storage_info_counts_local_rows() {
        let state = offline_state();
        add_favorite(&state, 1).await.unwrap();

        let info = storage_info(&state).unwrap();
        assert_eq!(info.local_favorite_count, 1);
        assert!(info.size_bytes > 0);
    }

    #[test]
    fn test_categories_cover_six_screens() {
        let categories = list_categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, "masques");
    }
}
