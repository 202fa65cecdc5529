// src/services/session.rs
//
// The one session of the running app: bearer token, signed-in account or
// offline profile, premium status. Created at start-up, torn down on logout.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::domain::{LocalProfile, PremiumSubscription, User};
use crate::error::AppResult;
use crate::integrations::TokenProvider;
use crate::repositories::{SessionRepository, StoredSession};

/// Who is using the app right now
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Anonymous,
    Account { user: User },
    Local { profile: LocalProfile },
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
    local_profile: Option<LocalProfile>,
    subscription: Option<PremiumSubscription>,
}

impl SessionState {
    fn stored(&self) -> StoredSession {
        StoredSession {
            token: self.token.clone(),
            user: self.user.clone(),
            local_profile: self.local_profile.clone(),
        }
    }
}

pub struct SessionContext {
    state: RwLock<SessionState>,
    repo: Arc<dyn SessionRepository>,
}

impl SessionContext {
    /// Empty session; nothing is read from disk
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            repo,
        }
    }

    /// Session loaded from the repository
    pub fn restore(
        repo: Arc<dyn SessionRepository>,
        subscription: Option<PremiumSubscription>,
    ) -> AppResult<Self> {
        let stored = repo.load()?;
        let state = SessionState {
            token: stored.token,
            user: stored.user,
            local_profile: stored.local_profile,
            subscription,
        };
        Ok(Self {
            state: RwLock::new(state),
            repo,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, state: &SessionState) -> AppResult<()> {
        self.repo.save(&state.stored())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn identity(&self) -> Identity {
        let state = self.read();
        match (&state.token, &state.user, &state.local_profile) {
            (Some(_), Some(user), _) => Identity::Account { user: user.clone() },
            (_, _, Some(profile)) => Identity::Local { profile: profile.clone() },
            _ => Identity::Anonymous,
        }
    }

    pub fn has_token(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        let state = self.read();
        state.token.as_ref().and(state.user.clone())
    }

    pub fn local_profile(&self) -> Option<LocalProfile> {
        self.read().local_profile.clone()
    }

    pub fn subscription(&self) -> Option<PremiumSubscription> {
        self.read().subscription.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().map_or(false, |u| u.has_admin_rights())
    }

    /// Premium through the account or a locally recorded subscription
    pub fn is_premium(&self) -> bool {
        let account_premium = self.current_user().map_or(false, |u| u.is_premium);
        let local_premium = self.subscription().map_or(false, |s| s.actif);
        account_premium || local_premium
    }

    pub fn display_name(&self) -> Option<String> {
        match self.identity() {
            Identity::Account { user } => Some(user.display_name().to_string()),
            Identity::Local { profile } => Some(
                profile
                    .nom_complet
                    .clone()
                    .unwrap_or_else(|| profile.username.clone()),
            ),
            Identity::Anonymous => None,
        }
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    pub fn start_account(&self, token: String, user: User) -> AppResult<()> {
        let mut state = self.write();
        state.token = Some(token);
        state.user = Some(user);
        self.persist(&state)
    }

    /// Replaces the cached account record (after a profile reload or edit)
    pub fn set_user(&self, user: User) -> AppResult<()> {
        let mut state = self.write();
        state.user = Some(user);
        self.persist(&state)
    }

    /// Drops the account but keeps any offline profile
    pub fn end_account(&self) -> AppResult<()> {
        let mut state = self.write();
        state.token = None;
        state.user = None;
        self.persist(&state)
    }

    pub fn start_local(&self, profile: LocalProfile) -> AppResult<()> {
        let mut state = self.write();
        state.local_profile = Some(profile);
        self.persist(&state)
    }

    pub fn set_subscription(&self, subscription: Option<PremiumSubscription>) {
        self.write().subscription = subscription;
    }

    /// Forget everything, in memory and on disk
    pub fn teardown(&self) -> AppResult<()> {
        *self.write() = SessionState::default();
        self.repo.clear()
    }
}

impl TokenProvider for SessionContext {
    fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    fn clear_token(&self) {
        if let Err(e) = self.end_account() {
            log::warn!("Failed to persist cleared token: {}", e);
        }
    }
}
