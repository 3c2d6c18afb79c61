//! Build-time Configuration
//!
//! Endpoints and keys are baked in at compile time from environment
//! variables, the same way the WASM bundle is configured by `trunk build`.

/// Default remote API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Default identity toolkit base URL
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";
/// Default secure token (refresh) base URL
pub const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com";

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote persistence API, without trailing slash
    pub api_url: String,
    /// Web API key of the identity provider project
    pub firebase_api_key: String,
    /// Identity toolkit base URL (sign-in, sign-up, profile)
    pub identity_url: String,
    /// Secure token base URL (refresh exchange)
    pub secure_token_url: String,
}

impl Config {
    pub fn new(
        api_url: &str,
        firebase_api_key: &str,
        identity_url: &str,
        secure_token_url: &str,
    ) -> Self {
        Self {
            api_url: trim_url(api_url),
            firebase_api_key: firebase_api_key.to_string(),
            identity_url: trim_url(identity_url),
            secure_token_url: trim_url(secure_token_url),
        }
    }

    /// Configuration captured from `FOOD_SHARE_*` variables at build time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("FOOD_SHARE_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("FOOD_SHARE_FIREBASE_API_KEY").unwrap_or(""),
            option_env!("FOOD_SHARE_IDENTITY_URL").unwrap_or(DEFAULT_IDENTITY_URL),
            option_env!("FOOD_SHARE_SECURE_TOKEN_URL").unwrap_or(DEFAULT_SECURE_TOKEN_URL),
        )
    }

    /// Every endpoint pointed at one host (mock servers)
    #[cfg(test)]
    pub(crate) fn single_host(url: &str) -> Self {
        Self::new(url, "test-key", url, url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = Config::new("http://api.local/", "k", "https://id.local//", " https://st.local ");
        assert_eq!(config.api_url, "http://api.local");
        assert_eq!(config.identity_url, "https://id.local");
        assert_eq!(config.secure_token_url, "https://st.local");
    }

    #[test]
    fn test_build_env_defaults() {
        let config = Config::from_build_env();
        if option_env!("FOOD_SHARE_API_URL").is_none() {
            assert_eq!(config.api_url, DEFAULT_API_URL);
        }
        assert!(!config.identity_url.ends_with('/'));
    }
}
