//! SQLite storage for cached listings

mod cache;
mod schema;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use cache::CachedQuery;

/// Handle to the local database
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at the default location
    pub fn open() -> Result<Self> {
        Self::open_at(&Self::db_path()?)
    }

    /// Open (or create) a database at `path`
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Default database path (`<data_dir>/marquee.db`)
    pub fn db_path() -> Result<PathBuf> {
        Ok(crate::config::MarqueeConfig::data_dir()?.join("marquee.db"))
    }
}
