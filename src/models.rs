//! Data models for the movie listing

use serde::{Deserialize, Serialize};

/// A single movie from the listing
///
/// Records are immutable once fetched; the browser only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    /// Create a movie with only the fields the browser needs
    pub fn new(id: i64, title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: overview.into(),
            backdrop_path: None,
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    /// Add a backdrop image path
    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    /// Backdrop path, treating an empty string the same as a missing one
    pub fn backdrop(&self) -> Option<&str> {
        self.backdrop_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Release year, if the release date is present
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }
}

/// Date window reported alongside a now-playing listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub minimum: String,
    pub maximum: String,
}

/// One page of a listing response, in API order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviesPage {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub dates: Option<DateWindow>,
}

fn first_page() -> u32 {
    1
}

impl MoviesPage {
    /// Wrap a list of movies as a single-page listing
    pub fn from_results(results: Vec<Movie>) -> Self {
        let total = results.len() as u32;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results: total,
            dates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_with_missing_optionals() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 42, "title": "Dune", "overview": "Spice.", "backdrop_path": null},
                {"id": 7, "title": "Heat"}
            ],
            "total_pages": 3,
            "total_results": 60,
            "dates": {"minimum": "2024-01-01", "maximum": "2024-02-01"}
        }"#;

        let page: MoviesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].id, 42);
        assert_eq!(page.results[1].overview, "");
        assert!(page.results[1].backdrop_path.is_none());
        assert_eq!(page.dates.unwrap().minimum, "2024-01-01");
    }

    #[test]
    fn test_empty_backdrop_is_missing() {
        let movie = Movie::new(1, "A", "").with_backdrop("");
        assert!(movie.backdrop().is_none());

        let movie = Movie::new(1, "A", "").with_backdrop("/a.jpg");
        assert_eq!(movie.backdrop(), Some("/a.jpg"));
    }

    #[test]
    fn test_release_year() {
        let mut movie = Movie::new(1, "A", "");
        assert!(movie.release_year().is_none());

        movie.release_date = Some("1995-12-15".to_string());
        assert_eq!(movie.release_year(), Some("1995"));

        movie.release_date = Some("soon".to_string());
        assert!(movie.release_year().is_none());
    }
}
