//! Resolve a detail route to a loaded movie

use crate::models::Movie;

/// Parse a route id into a movie id
///
/// Accepts only plain base-10 integers (an optional leading `-` included).
/// Anything else, including whitespace and overflow, yields `None`.
pub fn parse_item_id(item_id: &str) -> Option<i64> {
    let digits = item_id.strip_prefix('-').unwrap_or(item_id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    item_id.parse().ok()
}

/// Find the movie a detail route points at
///
/// Returns `None` while the list is still loading, when the id is missing or
/// malformed, or when no loaded movie has that id.
pub fn resolve<'a>(item_id: Option<&str>, items: Option<&'a [Movie]>) -> Option<&'a Movie> {
    let id = parse_item_id(item_id?)?;
    items?.iter().find(|movie| movie.id == id)
}
