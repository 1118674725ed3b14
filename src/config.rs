use std::{env, time::Duration};

use url::Url;

/// Base URL of the production Vaultix API.
pub const DEFAULT_BASE_URL: &str = "https://api.vaultix.global/api/v1";

/// Primary environment variable holding the API key.
pub const API_KEY_ENV: &str = "VAULTIX_API_KEY";

/// Legacy name accepted when `VAULTIX_API_KEY` is unset.
pub const SECRET_KEY_ENV: &str = "VAULTIX_SECRET_KEY";

/// Resolved settings for talking to the Vaultix API.
#[derive(Clone)]
pub struct VaultixConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for VaultixConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultixConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VaultixConfig {
    /// Build a config from explicit values.
    ///
    /// The base URL must be an absolute http(s) URL; a trailing `/` is
    /// stripped so that paths like `/charges` can be appended directly.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "{} environment variable is required (set it with: export {}=sk_live_...)",
                API_KEY_ENV,
                API_KEY_ENV
            ));
        }

        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL `{}`: {}", base_url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "Base URL `{}` must use http or https",
                base_url
            ));
        }

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

/// Pick the API key: an explicit value wins, then `VAULTIX_API_KEY`, then
/// `VAULTIX_SECRET_KEY`. Empty values are skipped.
pub fn resolve_api_key(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|k| !k.is_empty())
        .or_else(|| env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
        .or_else(|| env::var(SECRET_KEY_ENV).ok().filter(|k| !k.is_empty()))
}
