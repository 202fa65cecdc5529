// src/services/auth_service_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::cache::{CacheKey, CacheStore};
    use crate::domain::{LocalProfileKind, NewAccount, Plan, PremiumSubscription, ProfileUpdate};
    use crate::error::AppError;
    use crate::integrations::{LoginResponse, MockAccountApi};
    use crate::repositories::SubscriptionRepository;
    use crate::services::auth_service::AuthService;
    use crate::services::session::Identity;
    use crate::services::test_support::{offline, user, Harness};

    fn service(harness: &Harness, api: MockAccountApi) -> AuthService {
        AuthService::new(
            Arc::new(api),
            harness.session.clone(),
            harness.subscriptions.clone(),
            harness.resolver.clone(),
            harness.event_bus.clone(),
        )
    }

    // ========================================================================
    // LOGIN / REGISTER
    // ========================================================================

    #[tokio::test]
    async fn test_login_starts_account_session() {
        let harness = Harness::new();
        let mut api = MockAccountApi::new();
        api.expect_login()
            .withf(|email, password| email == "awa@ivoculture.ci" && password == "secret1")
            .times(1)
            .returning(|_, _| {
                Ok(LoginResponse {
                    access_token: "jwt-1".to_string(),
                    token_type: "bearer".to_string(),
                    user: user(4, false),
                })
            });
        let auth = service(&harness, api);

        let signed_in = auth.login("  awa@ivoculture.ci ", "secret1").await.unwrap();

        assert_eq!(signed_in.id, 4);
        assert!(harness.session.is_authenticated());
        assert_eq!(harness.emitted("SessionStarted"), 1);
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        let err = auth.login("", "secret1").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!harness.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let harness = Harness::new();
        let mut api = MockAccountApi::new();
        api.expect_login().returning(|_, _| Err(AppError::Unauthorized));
        let auth = service(&harness, api);

        assert!(auth.login("awa@ivoculture.ci", "wrong-pass").await.is_err());
        assert_eq!(harness.session.identity(), Identity::Anonymous);
        assert_eq!(harness.emitted("SessionStarted"), 0);
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let harness = Harness::new();
        let mut api = MockAccountApi::new();
        api.expect_register().times(1).returning(|_| Ok(user(12, false)));
        let auth = service(&harness, api);

        let account = NewAccount {
            email: "yao@ivoculture.ci".to_string(),
            username: "yao".to_string(),
            password: "motdepasse".to_string(),
            nom_complet: None,
        };
        let created = auth.register(account).await.unwrap();

        assert_eq!(created.id, 12);
        assert!(!harness.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_rejects_short_password_before_calling_backend() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        let account = NewAccount {
            email: "yao@ivoculture.ci".to_string(),
            username: "yao".to_string(),
            password: "abc".to_string(),
            nom_complet: None,
        };
        assert!(matches!(
            auth.register(account).await.unwrap_err(),
            AppError::Domain(_)
        ));
    }

    // ========================================================================
    // RELOAD
    // ========================================================================

    #[tokio::test]
    async fn test_reload_without_token_is_noop() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        assert_eq!(auth.reload().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reload_refreshes_profile() {
        let harness = Harness::signed_in(false);
        let mut api = MockAccountApi::new();
        api.expect_me().returning(|| {
            let mut fresh = user(7, false);
            fresh.is_premium = true;
            Ok(fresh)
        });
        let auth = service(&harness, api);

        let reloaded = auth.reload().await.unwrap().unwrap();
        assert!(reloaded.is_premium);
        assert!(harness.session.is_premium());
    }

    #[tokio::test]
    async fn test_reload_offline_keeps_stored_profile() {
        let harness = Harness::signed_in(false);
        let mut api = MockAccountApi::new();
        api.expect_me().returning(|| Err(offline()));
        let auth = service(&harness, api);

        let kept = auth.reload().await.unwrap();
        assert_eq!(kept.map(|u| u.id), Some(7));
        assert!(harness.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_reload_rejected_token_ends_account() {
        let harness = Harness::signed_in(false);
        let mut api = MockAccountApi::new();
        api.expect_me().returning(|| Err(AppError::Unauthorized));
        let auth = service(&harness, api);

        assert_eq!(auth.reload().await.unwrap(), None);
        assert!(!harness.session.is_authenticated());
        assert_eq!(harness.emitted("SessionEnded"), 1);
    }

    // ========================================================================
    // LOGOUT / LOCAL PROFILE
    // ========================================================================

    #[tokio::test]
    async fn test_logout_clears_session_subscription_and_scoped_caches() {
        let harness = Harness::signed_in(false);
        harness
            .subscriptions
            .save(&PremiumSubscription::activate(Plan::Annuel))
            .unwrap();
        harness
            .cache
            .set(&CacheKey::Favorites, "[]".to_string())
            .await
            .unwrap();
        harness
            .cache
            .set(&CacheKey::Regions, "[]".to_string())
            .await
            .unwrap();
        let auth = service(&harness, MockAccountApi::new());

        auth.logout().await.unwrap();

        assert_eq!(harness.session.identity(), Identity::Anonymous);
        assert!(harness.subscriptions.get().unwrap().is_none());
        assert!(harness.cache.get(&CacheKey::Favorites).await.unwrap().is_none());
        assert!(harness.cache.get(&CacheKey::Regions).await.unwrap().is_some());
        assert_eq!(harness.emitted("SessionEnded"), 1);
    }

    #[tokio::test]
    async fn test_local_profile_needs_no_backend() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        let profile = auth
            .start_local_profile(" visiteur ", Some("Jean Kouassi".to_string()), LocalProfileKind::Touriste)
            .unwrap();

        assert_eq!(profile.username, "visiteur");
        assert_eq!(harness.session.display_name().as_deref(), Some("Jean Kouassi"));
        assert!(!harness.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_local_profile_rejects_short_username() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        assert!(auth
            .start_local_profile("ab", None, LocalProfileKind::Local)
            .is_err());
        assert_eq!(harness.session.identity(), Identity::Anonymous);
    }

    #[tokio::test]
    async fn test_update_profile_requires_account() {
        let harness = Harness::new();
        let auth = service(&harness, MockAccountApi::new());

        let err = auth.update_profile(ProfileUpdate::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
