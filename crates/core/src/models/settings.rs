use serde::{Deserialize, Serialize};

use crate::decode::WireContract;
use crate::errors::CoreError;

pub const ENV_SERVER_URL: &str = "PORTFOLIO_SERVER_URL";
pub const ENV_TIMEOUT_SECS: &str = "PORTFOLIO_TIMEOUT_SECS";
pub const ENV_WIRE_CONTRACT: &str = "PORTFOLIO_WIRE_CONTRACT";

/// Client configuration: where the portfolio server lives and how to read its responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the portfolio server, without a trailing slash (e.g. "http://localhost:8000").
    pub server_url: String,

    /// Request timeout applied by the HTTP transport.
    pub timeout_secs: u64,

    /// Which assetable encodings the decoders accept.
    pub wire_contract: WireContract,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            wire_contract: WireContract::Canonical,
        }
    }
}

impl ClientSettings {
    /// Defaults overridden by `PORTFOLIO_*` environment variables, then validated.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_SERVER_URL) {
            settings.server_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            settings.timeout_secs = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{ENV_TIMEOUT_SECS} is not a number: {raw}"))
            })?;
        }

        if let Some(raw) = lookup(ENV_WIRE_CONTRACT) {
            settings.wire_contract = match raw.trim().to_lowercase().as_str() {
                "canonical" => WireContract::Canonical,
                "migration" => WireContract::Migration,
                _ => {
                    return Err(CoreError::Config(format!(
                        "{ENV_WIRE_CONTRACT} must be 'canonical' or 'migration', got {raw}"
                    )))
                }
            };
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "server_url must start with http:// or https://: {}",
                self.server_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path such as "/transactions".
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), path)
    }
}
