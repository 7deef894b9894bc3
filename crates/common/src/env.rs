//! Environment helpers
//!
//! Small lookups shared by binaries and the HTTP client.

/// Client-facing API base URL used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

/// Return the first variable among `keys` that is set to a non-blank value.
pub fn first_non_empty(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| std::env::var(k).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Resolve the API base URL from `API_URL`, falling back to [`DEFAULT_API_URL`].
pub fn api_url() -> String {
    first_non_empty(&["API_URL"]).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_skips_blank_values() {
        std::env::set_var("COMMON_ENV_TEST_BLANK", "  ");
        std::env::set_var("COMMON_ENV_TEST_SET", " value ");
        let got = first_non_empty(&["COMMON_ENV_TEST_MISSING", "COMMON_ENV_TEST_BLANK", "COMMON_ENV_TEST_SET"]);
        assert_eq!(got.as_deref(), Some("value"));
    }
}
