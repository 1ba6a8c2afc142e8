//! Build-time application settings.
//!
//! The browser has no process environment, so values are baked in when the
//! bundle is compiled. Unset variables fall back to the local development
//! defaults.

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Farmacia REST API root, without trailing slash.
    pub api_base_url: String,
    /// localStorage key under which the login flow stores the session.
    pub session_storage_key: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>, session_storage_key: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            session_storage_key: session_storage_key.into(),
        }
    }

    /// Reads `FARMACIA_API_URL` and `FARMACIA_SESSION_KEY` at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("FARMACIA_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("FARMACIA_SESSION_KEY").unwrap_or(DEFAULT_SESSION_KEY),
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
