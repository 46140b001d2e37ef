//! Client configuration.

use anyhow::{Context, bail};
use reqwest::Url;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "PRODUCTS_API_URL";

/// Used when neither the runtime nor the build environment sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:3002/bp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Validate and normalize a base URL (trailing slashes dropped).
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("products API base URL is empty");
        }

        let base_url = Url::parse(trimmed)
            .with_context(|| format!("invalid products API base URL {trimmed:?}"))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            bail!(
                "products API base URL must be http or https, got {:?}",
                base_url.scheme()
            );
        }

        Ok(Self { base_url })
    }

    /// Resolve the base URL from `PRODUCTS_API_URL`.
    ///
    /// The runtime environment wins; the value baked in at build time is the
    /// fallback (and the only source in the browser).
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("PRODUCTS_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(&raw).with_context(|| format!("failed to load {API_URL_ENV}"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ClientConfig::new("http://localhost:3002/bp/").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:3002/bp");
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = ClientConfig::new("  / ").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(ClientConfig::new("ftp://example.com/bp").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn default_url_is_accepted_as_is() {
        let config = ClientConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:3002/bp");
    }
}
