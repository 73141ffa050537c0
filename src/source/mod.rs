//! Movie listing sources and the cached query around them
//!
//! A [`MovieSource`] knows how to fetch one listing. A [`Query`] owns the
//! loading state the browser renders from: it serves a fresh cache entry
//! straight away, otherwise fetches on a worker thread and hands the result
//! back to the event loop through a channel.

mod error;
mod file;
mod tmdb;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use chrono::Utc;
use tracing::{info, warn};

pub use error::SourceError;
pub use file::FileSource;
pub use tmdb::TmdbSource;

use crate::db::Database;
use crate::models::{Movie, MoviesPage};

/// Stable cache key, e.g. `["movies", "nowPlaying"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        Self(parts.into_iter().collect::<Vec<_>>().join("/"))
    }

    /// Key of the now-playing listing
    pub fn now_playing() -> Self {
        Self::new(["movies", "nowPlaying"])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Something that can fetch a listing
pub trait MovieSource: Send + Sync {
    /// Cache key for this listing
    fn key(&self) -> QueryKey;

    /// Label stored alongside cached results
    fn label(&self) -> &'static str {
        "api"
    }

    /// Fetch the listing (blocking)
    fn fetch(&self) -> Result<MoviesPage, SourceError>;
}

/// Outcome delivered by [`Query::poll`]
#[derive(Debug)]
pub enum QueryEvent {
    Loaded,
    Failed(SourceError),
}

/// Loading state of one listing
pub struct Query {
    key: QueryKey,
    source: Arc<dyn MovieSource>,
    data: Option<MoviesPage>,
    error: Option<String>,
    pending: Option<Receiver<Result<MoviesPage, SourceError>>>,
    from_cache: bool,
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("key", &self.key)
            .field("loaded", &self.data.is_some())
            .field("fetching", &self.pending.is_some())
            .field("error", &self.error)
            .finish()
    }
}

impl Query {
    /// Query with nothing loaded and nothing in flight
    pub fn idle(source: Arc<dyn MovieSource>) -> Self {
        Self {
            key: source.key(),
            source,
            data: None,
            error: None,
            pending: None,
            from_cache: false,
        }
    }

    /// Serve from cache when fresh, otherwise start a background fetch
    pub fn start(source: Arc<dyn MovieSource>, db: &Database, ttl: chrono::Duration) -> Self {
        let mut query = Self::idle(source);
        match db.load_query(&query.key) {
            Ok(Some(cached)) if cached.is_fresh(ttl, Utc::now()) => {
                info!(key = query.key.as_str(), "serving listing from cache");
                query.data = Some(cached.page);
                query.from_cache = true;
            }
            Ok(_) => query.refetch(),
            Err(e) => {
                warn!(error = %e, "cache lookup failed");
                query.refetch();
            }
        }
        query
    }

    /// Query that is already resolved (tests, `marquee list`)
    pub fn ready(source: Arc<dyn MovieSource>, page: MoviesPage) -> Self {
        let mut query = Self::idle(source);
        query.data = Some(page);
        query
    }

    /// Start a background fetch unless one is already running
    ///
    /// Previously loaded data stays visible while the fetch runs.
    pub fn refetch(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        std::thread::spawn(move || {
            // The receiver may be gone if the app quit first
            let _ = tx.send(source.fetch());
        });
        self.pending = Some(rx);
        self.error = None;
    }

    /// Collect a finished fetch without blocking
    ///
    /// Successful results are written to the cache when `db` is given.
    pub fn poll(&mut self, db: Option<&Database>) -> Option<QueryEvent> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(SourceError::Decode(
                "fetch worker exited without a result".to_string(),
            )),
        };
        self.pending = None;
        Some(self.settle(result, db))
    }

    /// Block until the running fetch finishes (CLI commands)
    pub fn wait(&mut self, db: Option<&Database>) -> Option<QueryEvent> {
        let rx = self.pending.take()?;
        let result = rx.recv().unwrap_or_else(|_| {
            Err(SourceError::Decode(
                "fetch worker exited without a result".to_string(),
            ))
        });
        Some(self.settle(result, db))
    }

    fn settle(&mut self, result: Result<MoviesPage, SourceError>, db: Option<&Database>) -> QueryEvent {
        match result {
            Ok(page) => {
                if let Some(db) = db
                    && let Err(e) = db.store_query(&self.key, &page, Some(self.source.label()), Utc::now())
                {
                    warn!(error = %e, "failed to cache listing");
                }
                self.data = Some(page);
                self.error = None;
                self.from_cache = false;
                QueryEvent::Loaded
            }
            Err(e) => {
                warn!(error = %e, "listing fetch failed");
                self.error = Some(e.to_string());
                QueryEvent::Failed(e)
            }
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// True while there is nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.pending.is_some()
    }

    /// True while any fetch is running, even over stale data
    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn data(&self) -> Option<&MoviesPage> {
        self.data.as_ref()
    }

    /// Loaded movies in API order
    pub fn items(&self) -> Option<&[Movie]> {
        self.data.as_ref().map(|page| page.results.as_slice())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn from_cache(&self) -> bool {
        self.from_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    impl MovieSource for StubSource {
        fn key(&self) -> QueryKey {
            QueryKey::now_playing()
        }

        fn label(&self) -> &'static str {
            "stub"
        }

        fn fetch(&self) -> Result<MoviesPage, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SourceError::Status { status: 500 })
            } else {
                Ok(MoviesPage::from_results(vec![Movie::new(1, "One", "")]))
            }
        }
    }

    #[test]
    fn test_query_key() {
        assert_eq!(QueryKey::now_playing().as_str(), "movies/nowPlaying");
    }

    #[test]
    fn test_fetch_then_cache_hit() {
        let db = Database::open_in_memory().unwrap();
        let source = StubSource::new(false);

        let mut query = Query::start(source.clone(), &db, chrono::Duration::hours(1));
        assert!(query.is_loading());
        assert!(query.items().is_none());

        assert!(matches!(query.wait(Some(&db)), Some(QueryEvent::Loaded)));
        assert!(!query.is_loading());
        assert_eq!(query.items().map(|m| m.len()), Some(1));
        assert!(!query.from_cache());

        // A second mount reuses the cached listing without fetching
        let again = Query::start(source.clone(), &db, chrono::Duration::hours(1));
        assert!(!again.is_loading());
        assert!(again.from_cache());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stale_cache_refetches() {
        let db = Database::open_in_memory().unwrap();
        let source = StubSource::new(false);
        let old = Utc::now() - chrono::Duration::hours(3);
        db.store_query(
            &QueryKey::now_playing(),
            &MoviesPage::from_results(vec![]),
            None,
            old,
        )
        .unwrap();

        let mut query = Query::start(source.clone(), &db, chrono::Duration::hours(1));
        assert!(query.is_fetching());
        query.wait(Some(&db));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_recorded() {
        let db = Database::open_in_memory().unwrap();
        let mut query = Query::start(StubSource::new(true), &db, chrono::Duration::hours(1));

        assert!(matches!(query.wait(Some(&db)), Some(QueryEvent::Failed(_))));
        assert!(query.items().is_none());
        assert!(!query.is_loading());
        assert!(query.error().unwrap().contains("500"));
    }

    #[test]
    fn test_poll_without_pending_fetch() {
        let mut query = Query::ready(
            StubSource::new(false),
            MoviesPage::from_results(vec![Movie::new(3, "Three", "")]),
        );
        assert!(query.poll(None).is_none());
        assert!(query.wait(None).is_none());
        assert_eq!(query.items().map(|m| m[0].id), Some(3));
    }
}
