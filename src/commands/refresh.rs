//! Refresh the cached listing

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, info};

use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::source::{MovieSource, Query};

/// Fetch the listing now and store it in the cache
pub fn cmd_refresh(db: &Database) -> Result<()> {
    let config = MarqueeConfig::load()?;
    let source = super::build_source(&config, None)?;

    let query = refresh_listing(db, source)?;

    let count = query.items().map(<[_]>::len).unwrap_or(0);
    info!(count, key = query.key().as_str(), "cache refreshed");
    println!(
        "{} Cached {} movie{} under '{}'",
        "+".green(),
        count,
        if count == 1 { "" } else { "s" },
        query.key().as_str()
    );
    println!("  Database: {}", Database::db_path()?.display());
    Ok(())
}

/// Drop the cached entry, then fetch it again
///
/// A failed fetch leaves no entry behind, so later commands fetch instead of
/// serving the old listing.
fn refresh_listing(db: &Database, source: Arc<dyn MovieSource>) -> Result<Query> {
    let mut query = Query::idle(source);
    if db.clear_query(query.key())? {
        debug!(key = query.key().as_str(), "dropped cached listing");
    }
    super::fetch_now(&mut query, db)?;
    Ok(query)
}
