//! API URL Resolver
//!
//! Joins the configured base URL with a relative path, normalizing to exactly
//! one `/` between them regardless of leading/trailing slashes on either side.

/// Compose a full request URL from a base URL and a relative path
pub fn join_api_url(base_url: &str, path: &str) -> String {
    let clean_path = path.strip_prefix('/').unwrap_or(path);
    let clean_base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", clean_base, clean_path)
}
