//! Backend base-URL configuration.
//!
//! The only environment-driven setting in the client: where the REST backend
//! lives. Baked in at compile time via `ADMIN_STAY_API_URL` (the deploy
//! pipeline sets it), with a localhost default for development.

use std::sync::OnceLock;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

static BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Base URL for all backend requests, without a trailing slash.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| normalize(option_env!("ADMIN_STAY_API_URL").unwrap_or(DEFAULT_BASE_URL)))
}

/// Override the base URL before first use. Used by tests pointing the
/// resource client at a local fixture server; anything else reading
/// `base_url()` first wins, so only the fixture harness may call this.
pub fn set_base_url(url: &str) -> Result<(), String> {
    BASE_URL
        .set(normalize(url))
        .map_err(|_| "base URL already initialized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // `base_url()` itself is deliberately untouched here: reading it would
    // initialize the process-wide value before the fixture server picks a
    // port.
    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(normalize("http://localhost:8080/api/"), "http://localhost:8080/api");
        assert_eq!(normalize("http://localhost:8080/api"), "http://localhost:8080/api");
    }
}
