// src/repositories/session_repository.rs
//
// Persistence of the single session row.

use std::sync::Arc;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::{LocalProfile, User};
use crate::error::AppResult;

/// What survives an app restart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
    pub local_profile: Option<LocalProfile>,
}

pub trait SessionRepository: Send + Sync {
    fn load(&self) -> AppResult<StoredSession>;
    fn save(&self, session: &StoredSession) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct SqliteSessionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn load(&self) -> AppResult<StoredSession> {
        let conn = self.pool.get()?;

        let row: Option<(Option<String>, Option<String>, Option<String>)> = conn
            .query_row(
                "SELECT token, user_json, local_profile_json FROM session WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((token, user_json, profile_json)) = row else {
            return Ok(StoredSession::default());
        };

        // A corrupt profile only costs the profile, never the token
        let user = user_json.and_then(|json| match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding unreadable stored user: {}", e);
                None
            }
        });
        let local_profile = profile_json.and_then(|json| match serde_json::from_str(&json) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Discarding unreadable local profile: {}", e);
                None
            }
        });

        Ok(StoredSession {
            token,
            user,
            local_profile,
        })
    }

    fn save(&self, session: &StoredSession) -> AppResult<()> {
        let conn = self.pool.get()?;

        let user_json = session.user.as_ref().map(serde_json::to_string).transpose()?;
        let profile_json = session
            .local_profile
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        conn.execute(
            "INSERT OR REPLACE INTO session (id, token, user_json, local_profile_json, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4)",
            params![session.token, user_json, profile_json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM session", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalProfileKind;
    use crate::repositories::test_pool;

    fn user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 7, "email": "awa@ivoculture.ci", "username": "awa", "is_premium": true
        }))
        .unwrap()
    }

    #[test]
    fn test_load_empty_session() {
        let repo = SqliteSessionRepository::new(test_pool());
        assert_eq!(repo.load().unwrap(), StoredSession::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let repo = SqliteSessionRepository::new(test_pool());
        let session = StoredSession {
            token: Some("jwt".to_string()),
            user: Some(user()),
            local_profile: Some(LocalProfile::new("visiteur".to_string(), LocalProfileKind::Touriste)),
        };

        repo.save(&session).unwrap();
        assert_eq!(repo.load().unwrap(), session);
    }

    #[test]
    fn test_save_overwrites_single_row() {
        let pool = test_pool();
        let repo = SqliteSessionRepository::new(pool.clone());

        repo.save(&StoredSession { token: Some("a".to_string()), ..Default::default() }).unwrap();
        repo.save(&StoredSession { token: Some("b".to_string()), ..Default::default() }).unwrap();

        let rows: i64 = pool
            .get()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM session", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(repo.load().unwrap().token.as_deref(), Some("b"));
    }

    #[test]
    fn test_corrupt_user_keeps_token() {
        let pool = test_pool();
        pool.get()
            .unwrap()
            .execute(
                "INSERT INTO session (id, token, user_json, updated_at) VALUES (1, 'jwt', '{oops', 'now')",
                [],
            )
            .unwrap();

        let loaded = SqliteSessionRepository::new(pool).load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("jwt"));
        assert!(loaded.user.is_none());
    }

    #[test]
    fn test_clear() {
        let repo = SqliteSessionRepository::new(test_pool());
        repo.save(&StoredSession { token: Some("jwt".to_string()), ..Default::default() }).unwrap();
        repo.clear().unwrap();
        assert!(repo.load().unwrap().token.is_none());
    }
}
