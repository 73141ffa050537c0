//! Query cache operations

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use super::Database;
use crate::models::MoviesPage;
use crate::source::QueryKey;

/// A cached listing and when it was fetched
#[derive(Debug, Clone)]
pub struct CachedQuery {
    pub page: MoviesPage,
    pub fetched_at: DateTime<Utc>,
    pub source: Option<String>,
}

impl CachedQuery {
    /// Whether the entry is younger than `ttl`
    pub fn is_fresh(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

impl Database {
    // ==================== Query Cache ====================

    /// Store a listing under `key`, replacing any previous entry
    pub fn store_query(
        &self,
        key: &QueryKey,
        page: &MoviesPage,
        source: Option<&str>,
        fetched_at: DateTime<Utc>,
    ) -> Result<()> {
        let payload = serde_json::to_string(page).context("Failed to encode listing")?;
        self.conn.execute(
            "INSERT INTO query_cache (cache_key, payload, fetched_at, source) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(cache_key) DO UPDATE SET payload = ?2, fetched_at = ?3, source = ?4",
            params![key.as_str(), payload, fetched_at.to_rfc3339(), source],
        )?;
        Ok(())
    }

    /// Load the cached listing for `key`, if any
    ///
    /// Entries that no longer decode are treated as missing.
    pub fn load_query(&self, key: &QueryKey) -> Result<Option<CachedQuery>> {
        let row: Option<(String, String, Option<String>)> = self
            .conn
            .query_row(
                "SELECT payload, fetched_at, source FROM query_cache WHERE cache_key = ?1",
                [key.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((payload, fetched_at, source)) = row else {
            return Ok(None);
        };

        let Ok(page) = serde_json::from_str::<MoviesPage>(&payload) else {
            tracing::warn!(key = key.as_str(), "discarding undecodable cache entry");
            return Ok(None);
        };
        let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        Ok(Some(CachedQuery {
            page,
            fetched_at,
            source,
        }))
    }

    /// Drop the cached listing for `key`
    pub fn clear_query(&self, key: &QueryKey) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM query_cache WHERE cache_key = ?1", [key.as_str()])?;
        Ok(removed > 0)
    }
}
