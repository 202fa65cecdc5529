// src/services/auth_service.rs
use std::sync::Arc;

use crate::cache::{CacheKey, TieredResolver};
use crate::domain::{
    validate_local_profile, validate_new_account, LocalProfile, LocalProfileKind, NewAccount,
    ProfileUpdate, User,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SessionEnded, SessionKind, SessionStarted};
use crate::integrations::AccountApi;
use crate::repositories::SubscriptionRepository;
use crate::services::session::SessionContext;

pub struct AuthService {
    account_api: Arc<dyn AccountApi>,
    session: Arc<SessionContext>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
    resolver: TieredResolver,
    event_bus: Arc<EventBus>,
}

impl AuthService {
    pub fn new(
        account_api: Arc<dyn AccountApi>,
        session: Arc<SessionContext>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        resolver: TieredResolver,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            account_api,
            session,
            subscription_repo,
            resolver,
            event_bus,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Start-up hook: refresh the stored account, if any
    pub async fn restore(&self) -> Option<User> {
        match self.reload().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Session restore failed: {}", e);
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let login = self.account_api.login(email, password).await?;
        let user = login.user;

        self.session.start_account(login.access_token, user.clone())?;
        log::info!("Signed in as {}", user.username);

        self.event_bus.emit(SessionStarted::new(
            SessionKind::Account,
            user.display_name().to_string(),
        ));

        Ok(user)
    }

    /// Creates the account. Does not sign in.
    pub async fn register(&self, account: NewAccount) -> AppResult<User> {
        validate_new_account(&account)?;
        let user = self.account_api.register(&account).await?;
        log::info!("Registered account {}", user.username);
        Ok(user)
    }

    pub async fn logout(&self) -> AppResult<()> {
        self.session.teardown()?;
        self.subscription_repo.clear()?;

        if let Err(e) = self.resolver.store().remove_all(&CacheKey::SESSION_SCOPED).await {
            log::warn!("Failed to clear session caches: {}", e);
        }

        log::info!("Session torn down");
        self.event_bus.emit(SessionEnded::new("logout"));
        Ok(())
    }

    /// Re-fetch the signed-in profile.
    ///
    /// Without a token this is a no-op. A rejected token resets the account
    /// part of the session; an unreachable backend keeps the stored profile.
    pub async fn reload(&self) -> AppResult<Option<User>> {
        if !self.session.has_token() {
            return Ok(None);
        }

        match self.account_api.me().await {
            Ok(user) => {
                self.session.set_user(user.clone())?;
                Ok(Some(user))
            }
            Err(e) if e.is_offline() => {
                log::warn!("Backend unreachable, keeping stored profile: {}", e);
                Ok(self.session.current_user())
            }
            Err(e) => {
                log::warn!("Profile reload failed, signing out: {}", e);
                self.session.end_account()?;
                self.event_bus.emit(SessionEnded::new("profile reload failed"));
                Ok(None)
            }
        }
    }

    /// Offline profile, no password, nothing sent to the backend
    pub fn start_local_profile(
        &self,
        username: &str,
        nom_complet: Option<String>,
        kind: LocalProfileKind,
    ) -> AppResult<LocalProfile> {
        let mut profile = LocalProfile::new(username.trim().to_string(), kind);
        profile.nom_complet = nom_complet.filter(|n| !n.trim().is_empty());
        validate_local_profile(&profile)?;

        self.session.start_local(profile.clone())?;
        self.event_bus.emit(SessionStarted::new(
            SessionKind::LocalProfile,
            profile.username.clone(),
        ));

        Ok(profile)
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<User> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized);
        }
        let user = self.account_api.update_me(&update).await?;
        self.session.set_user(user.clone())?;
        Ok(user)
    }
}
