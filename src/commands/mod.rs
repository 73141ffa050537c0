//! CLI command implementations

mod browse;
mod config;
mod list;
mod refresh;
mod show;

pub use browse::cmd_browse;
pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use list::cmd_list;
pub use refresh::cmd_refresh;
pub use show::cmd_show;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{API_KEY_ENV, MarqueeConfig};
use crate::db::Database;
use crate::source::{FileSource, MovieSource, Query, QueryEvent, TmdbSource};

/// Listing source for the given options
pub(crate) fn build_source(
    config: &MarqueeConfig,
    offline: Option<PathBuf>,
) -> Result<Arc<dyn MovieSource>> {
    if let Some(path) = offline {
        return Ok(Arc::new(FileSource::new(path)));
    }
    if config.api.resolved_api_key().is_none() {
        bail!(
            "No API key configured. Set {} or api.api_key in {}",
            API_KEY_ENV,
            MarqueeConfig::config_path()?.display()
        );
    }
    Ok(Arc::new(TmdbSource::new(&config.api)))
}

pub(crate) fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

/// Run a fetch to completion behind a spinner
pub(crate) fn fetch_now(query: &mut Query, db: &Database) -> Result<()> {
    let spinner = spinner("Fetching now playing...")?;
    query.refetch();
    let event = query.wait(Some(db));
    spinner.finish_and_clear();

    match event {
        Some(QueryEvent::Failed(e)) => Err(e).context("Failed to fetch the listing"),
        _ => Ok(()),
    }
}

/// Cached listing when fresh, otherwise fetched now
pub(crate) fn load_listing(
    db: &Database,
    config: &MarqueeConfig,
    source: Arc<dyn MovieSource>,
    refresh: bool,
) -> Result<Query> {
    let mut query = if refresh {
        Query::idle(source)
    } else {
        Query::start(source, db, config.cache.ttl())
    };

    if query.data().is_none() {
        fetch_now(&mut query, db)?;
    }
    Ok(query)
}
