//! Route matching and navigation history
//!
//! The browser never decides on its own whether the detail overlay is open.
//! It reads the current location from a [`Navigator`], matches it against the
//! detail pattern, and pushes new locations when the user opens or closes the
//! overlay.

use tracing::debug;

/// Base location with no overlay
pub const BASE_PATH: &str = "/";

/// Pattern of the deep-linkable detail location
pub const DETAIL_PATTERN: &str = "/items/:itemId";

const DETAIL_PARAM: &str = "itemId";

/// Location of the detail view for a movie id
pub fn detail_path(id: impl std::fmt::Display) -> String {
    format!("/items/{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/items/:itemId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern; segments starting with `:` capture a parameter
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path, returning the captured `(name, value)` pairs
    ///
    /// Query strings and fragments are ignored, as is a trailing slash.
    /// Parameters never match an empty segment.
    pub fn match_path(&self, path: &str) -> Option<Vec<(String, String)>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_string())),
            }
        }
        Some(params)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Result of matching the current location against the detail pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub item_id: String,
}

/// Match `path` against [`DETAIL_PATTERN`]
pub fn match_detail(path: &str) -> Option<RouteMatch> {
    RoutePattern::parse(DETAIL_PATTERN)
        .match_path(path)?
        .into_iter()
        .find(|(name, _)| name == DETAIL_PARAM)
        .map(|(_, item_id)| RouteMatch { item_id })
}

/// Navigation history the browser observes and pushes to
pub trait Navigator {
    /// Current location
    fn location(&self) -> &str;

    /// Navigate to a new location
    fn push(&mut self, path: &str);

    /// Go back one entry; returns false when there is nothing to go back to
    fn back(&mut self) -> bool;

    /// Detail match for the current location
    fn route_match(&self) -> Option<RouteMatch> {
        match_detail(self.location())
    }
}

/// In-process history stack
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(BASE_PATH)
    }
}

impl MemoryHistory {
    /// Start a history at `initial` (e.g. a deep link)
    pub fn new(initial: &str) -> Self {
        let initial = if initial.is_empty() { BASE_PATH } else { initial };
        Self {
            entries: vec![initial.to_string()],
        }
    }

    /// Number of entries in the stack
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for MemoryHistory {
    fn location(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or(BASE_PATH)
    }

    fn push(&mut self, path: &str) {
        if self.location() == path {
            return;
        }
        debug!(from = self.location(), to = path, "navigate");
        self.entries.push(path.to_string());
    }

    fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        debug!(to = self.location(), "navigate back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_detail() {
        assert_eq!(
            match_detail("/items/42"),
            Some(RouteMatch {
                item_id: "42".to_string()
            })
        );
        assert_eq!(match_detail("/items/42/").map(|m| m.item_id), Some("42".into()));
        assert_eq!(
            match_detail("/items/42?tab=cast#top").map(|m| m.item_id),
            Some("42".into())
        );
    }

    #[test]
    fn test_non_detail_paths() {
        assert!(match_detail("/").is_none());
        assert!(match_detail("").is_none());
        assert!(match_detail("/items").is_none());
        assert!(match_detail("/items/").is_none());
        assert!(match_detail("/items/42/cast").is_none());
        assert!(match_detail("/movies/42").is_none());
    }

    #[test]
    fn test_non_numeric_ids_still_match() {
        // Validation happens when resolving, not when matching
        assert_eq!(match_detail("/items/abc").map(|m| m.item_id), Some("abc".into()));
    }

    #[test]
    fn test_pattern_with_multiple_params() {
        let pattern = RoutePattern::parse("/shows/:showId/season/:n");
        let params = pattern.match_path("/shows/9/season/2").unwrap();
        assert_eq!(
            params,
            vec![
                ("showId".to_string(), "9".to_string()),
                ("n".to_string(), "2".to_string())
            ]
        );
        assert!(pattern.match_path("/shows/9/episode/2").is_none());
    }

    #[test]
    fn test_history_push_and_back() {
        let mut history = MemoryHistory::default();
        assert_eq!(history.location(), "/");
        assert!(history.route_match().is_none());

        history.push(&detail_path(42));
        assert_eq!(history.location(), "/items/42");
        assert_eq!(history.route_match().map(|m| m.item_id), Some("42".into()));

        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(!history.back());
        assert_eq!(history.location(), "/");
    }

    #[test]
    fn test_history_ignores_duplicate_push() {
        let mut history = MemoryHistory::default();
        history.push("/items/1");
        history.push("/items/1");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_from_deep_link() {
        let history = MemoryHistory::new("/items/5");
        assert_eq!(history.route_match().map(|m| m.item_id), Some("5".into()));

        let history = MemoryHistory::new("");
        assert_eq!(history.location(), "/");
    }
}
