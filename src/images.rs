//! Image URL construction for listing artwork

/// Base URL of the image CDN
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Size used when no hint is given
pub const DEFAULT_IMAGE_SIZE: &str = "original";

/// Build the URL for an image path such as `/abc.jpg`
///
/// The result is passed through as-is by callers; a missing path still yields
/// a URL (ending in the size segment) so renderers never have to special-case it.
pub fn make_image_path(path: Option<&str>, size: Option<&str>) -> String {
    let size = size.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_IMAGE_SIZE);
    let path = path.unwrap_or_default();
    format!("{IMAGE_BASE_URL}/{size}{path}")
}
