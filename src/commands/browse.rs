//! Interactive browser command

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::browse::{BASE_PATH, match_detail};
use crate::config::MarqueeConfig;
use crate::db::Database;
use crate::logging;
use crate::source::Query;
use crate::tui;

/// Open the TUI at `path`
///
/// The listing loads in the background; the browser shows its loader until
/// the first result arrives.
pub fn cmd_browse(db: &Database, path: &str, offline: Option<PathBuf>) -> Result<()> {
    let log_path = logging::init_file()?;
    info!(log = %log_path.display(), "logging to file");
    let config = MarqueeConfig::load()?;
    let source = super::build_source(&config, offline)?;

    let start = if path == BASE_PATH || match_detail(path).is_some() {
        path
    } else {
        warn!(path, "unknown start location, using base");
        BASE_PATH
    };

    let query = Query::start(source, db, config.cache.ttl());
    tui::run(config, db, query, start)?;
    Ok(())
}
