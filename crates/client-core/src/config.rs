use tracing::warn;
use url::Url;

use crate::{error::ConfigError, storage::KeyValueStore};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Build-time environment variable naming the backend.
pub const API_BASE_URL_ENV: &str = "LG_API_BASE_URL";
/// Local storage key that overrides the backend at runtime.
pub const API_BASE_URL_OVERRIDE_KEY: &str = "lg_api_base_url";

/// Top-level configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Always ends with `/` so endpoint paths join below it.
    pub api_base_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: parse_base_url(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
        }
    }
}

impl ClientConfig {
    /// Build from a key lookup. The storage override wins over the build-time
    /// variable; invalid values are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let candidates = [API_BASE_URL_OVERRIDE_KEY, API_BASE_URL_ENV];
        let api_base_url = candidates
            .iter()
            .filter_map(|key| lookup(key).map(|value| (*key, value)))
            .find_map(|(key, value)| match parse_base_url(&value) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(key, error = %e, "ignoring invalid API base URL");
                    None
                }
            });

        match api_base_url {
            Some(api_base_url) => Self { api_base_url },
            None => Self::default(),
        }
    }

    /// Configuration for a running client: the compiled-in backend, unless
    /// the store carries an override.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let compiled = option_env!("LG_API_BASE_URL");
        Self::from_lookup(|key| match key {
            API_BASE_URL_OVERRIDE_KEY => store.get(key).ok().flatten(),
            API_BASE_URL_ENV => compiled.map(str::to_string),
            _ => None,
        })
    }
}

/// Parse an http(s) base URL and normalize it to end with `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
