// src/repositories/subscription_repository.rs

use std::sync::Arc;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::PremiumSubscription;
use crate::error::{AppError, AppResult};

pub trait SubscriptionRepository: Send + Sync {
    fn get(&self) -> AppResult<Option<PremiumSubscription>>;
    fn save(&self, subscription: &PremiumSubscription) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct SqliteSubscriptionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SubscriptionRepository for SqliteSubscriptionRepository {
    fn get(&self) -> AppResult<Option<PremiumSubscription>> {
        let conn = self.pool.get()?;

        let row: Option<(bool, String, String)> = conn
            .query_row(
                "SELECT active, plan, activated_at FROM premium_subscription WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((actif, plan, activated_at)) = row else {
            return Ok(None);
        };

        let plan = plan.parse().map_err(AppError::Domain)?;
        let date = DateTime::parse_from_rfc3339(&activated_at)?.with_timezone(&Utc);

        Ok(Some(PremiumSubscription { actif, date, plan }))
    }

    fn save(&self, subscription: &PremiumSubscription) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO premium_subscription (id, active, plan, activated_at)
             VALUES (1, ?1, ?2, ?3)",
            params![
                subscription.actif,
                subscription.plan.as_str(),
                subscription.date.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM premium_subscription", [])?;
        Ok(())
    }
}
