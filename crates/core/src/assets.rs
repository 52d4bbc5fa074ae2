//! Image path resolution.
//!
//! The backend stores image paths relative to its public asset root. Every
//! view that shows an image resolves the stored path with
//! [`resolve_image_url`].

/// Shown when a record has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolve a stored image path against the asset base URL.
///
/// # Examples
///
/// ```
/// use glimit_core::assets::resolve_image_url;
///
/// assert_eq!(resolve_image_url("http://cdn.local", "/news/a.jpg"), "http://cdn.local/news/a.jpg");
/// assert_eq!(resolve_image_url("http://cdn.local/", "news/a.jpg"), "http://cdn.local/news/a.jpg");
/// assert_eq!(resolve_image_url("http://cdn.local", "https://x.io/a.jpg"), "https://x.io/a.jpg");
/// assert_eq!(resolve_image_url("http://cdn.local", ""), "/placeholder.svg");
/// ```
pub fn resolve_image_url(asset_base: &str, path: &str) -> String {
    if path.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", asset_base.trim_end_matches('/'), clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_leading_slash() {
        assert_eq!(
            resolve_image_url("http://api", "//double.jpg"),
            "http://api//double.jpg"
        );
    }

    #[test]
    fn storage_prefixed_path() {
        assert_eq!(
            resolve_image_url("http://localhost:8000", "storage/hero/1.webp"),
            "http://localhost:8000/storage/hero/1.webp"
        );
    }
}
