//! Now-playing listing over HTTP

use tracing::{debug, info};

use super::{MovieSource, QueryKey, SourceError};
use crate::config::ApiConfig;
use crate::http::HTTP_AGENT;
use crate::models::MoviesPage;

/// Fetches `/movie/now_playing` from the listing API
#[derive(Debug, Clone)]
pub struct TmdbSource {
    base_url: String,
    api_key: Option<String>,
    language: String,
    region: Option<String>,
}

impl TmdbSource {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key(),
            language: config.language.clone(),
            region: config.region.clone().filter(|r| !r.is_empty()),
        }
    }

    /// Request URL, without the API key
    pub fn url(&self) -> String {
        let mut url = format!(
            "{}/movie/now_playing?language={}&page=1",
            self.base_url,
            urlencoding::encode(&self.language)
        );
        if let Some(region) = &self.region {
            url.push_str("&region=");
            url.push_str(&urlencoding::encode(region));
        }
        url
    }
}

impl MovieSource for TmdbSource {
    fn key(&self) -> QueryKey {
        QueryKey::now_playing()
    }

    fn label(&self) -> &'static str {
        "tmdb"
    }

    fn fetch(&self) -> Result<MoviesPage, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        let url = self.url();
        debug!(%url, "fetching listing");

        let mut response = HTTP_AGENT
            .get(&url)
            .query("api_key", api_key)
            .call()
            .map_err(|source| SourceError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(SourceError::Status { status });
        }

        let page: MoviesPage = response
            .body_mut()
            .read_json()
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        info!(count = page.results.len(), "listing fetched");
        Ok(page)
    }
}
