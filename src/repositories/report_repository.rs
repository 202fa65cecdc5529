// src/repositories/report_repository.rs
//
// Per-content report counters kept while offline.

use std::sync::Arc;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::ReportReason;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq)]
pub struct LocalReport {
    pub content_id: i64,
    pub count: u32,
    pub last_reason: ReportReason,
}

pub trait ReportRepository: Send + Sync {
    /// Bumps the counter and returns the new value
    fn increment(&self, content_id: i64, reason: ReportReason) -> AppResult<u32>;
    fn count_for(&self, content_id: i64) -> AppResult<u32>;
    fn list(&self) -> AppResult<Vec<LocalReport>>;
}

pub struct SqliteReportRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteReportRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl ReportRepository for SqliteReportRepository {
    fn increment(&self, content_id: i64, reason: ReportReason) -> AppResult<u32> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO local_reports (content_id, report_count, last_reason, last_reported_at)
             VALUES (?1, 1, ?2, ?3)
             ON CONFLICT(content_id) DO UPDATE SET
                report_count = report_count + 1,
                last_reason = excluded.last_reason,
                last_reported_at = excluded.last_reported_at",
            params![content_id, reason.as_str(), Utc::now().to_rfc3339()],
        )?;

        let count: i64 = conn.query_row(
            "SELECT report_count FROM local_reports WHERE content_id = ?1",
            params![content_id],
            |row| row.get(0),
        )?;

        Ok(count as u32)
    }

    fn count_for(&self, content_id: i64) -> AppResult<u32> {
        let conn = self.pool.get()?;

        let count: Option<i64> = conn
            .query_row(
                "SELECT report_count FROM local_reports WHERE content_id = ?1",
                params![content_id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(count.unwrap_or(0) as u32)
    }

    fn list(&self) -> AppResult<Vec<LocalReport>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT content_id, report_count, last_reason FROM local_reports ORDER BY content_id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                let reason: String = row.get(2)?;
                let count: i64 = row.get(1)?;
                Ok(LocalReport {
                    content_id: row.get(0)?,
                    count: count as u32,
                    last_reason: reason.parse().unwrap_or_default(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    #[test]
    fn test_increment_counts_per_content() {
        let repo = SqliteReportRepository::new(test_pool());

        assert_eq!(repo.increment(4, ReportReason::FausseInfo).unwrap(), 1);
        assert_eq!(repo.increment(4, ReportReason::DroitsAuteur).unwrap(), 2);
        assert_eq!(repo.increment(5, ReportReason::Autre).unwrap(), 1);

        assert_eq!(repo.count_for(4).unwrap(), 2);
        assert_eq!(repo.count_for(99).unwrap(), 0);
    }

    #[test]
    fn test_list_keeps_last_reason() {
        let repo = SqliteReportRepository::new(test_pool());
        repo.increment(4, ReportReason::FausseInfo).unwrap();
        repo.increment(4, ReportReason::DroitsAuteur).unwrap();

        let reports = repo.list().unwrap();
        assert_eq!(
            reports,
            vec![LocalReport {
                content_id: 4,
                count: 2,
                last_reason: ReportReason::DroitsAuteur,
            }]
        );
    }
}
