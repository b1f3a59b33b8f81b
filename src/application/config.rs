use crate::constants::{
    DEFAULT_REST_BASE_URL, DEFAULT_REST_TIMEOUT, ENV_IDENTIFIER, ENV_KEY, ENV_REST_BASE_URL,
    ENV_REST_TIMEOUT, ENV_TIER,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// Authentication tier of a token pair, sent as the `X-Crisp-Tier` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Token pair belonging to a user account
    User,
    /// Token pair belonging to a plugin (marketplace integrations)
    #[default]
    Plugin,
}

impl Tier {
    /// Header value for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::User => "user",
            Tier::Plugin => "plugin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Tier::User),
            "plugin" => Ok(Tier::Plugin),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Token pair used for HTTP Basic authentication against the Crisp API
///
/// The key is masked whenever the credentials are serialized, which also
/// covers their `Debug` and `Display` output.
pub struct Credentials {
    /// Token identifier (Basic auth username)
    pub identifier: String,
    /// Token key (Basic auth password)
    #[serde(serialize_with = "mask_secret")]
    pub key: String,
}

/// Placeholder written instead of a secret
pub const MASKED_SECRET: &str = "********";

fn mask_secret<S: Serializer>(_secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(MASKED_SECRET)
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Crisp API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Authentication tier of the credentials
    pub tier: Tier,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and a `.env` file when present)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let identifier = get_env_or_default(ENV_IDENTIFIER, String::from("default_identifier"));
        let key = get_env_or_default(ENV_KEY, String::from("default_key"));

        if identifier == "default_identifier" {
            error!("{} not found in environment variables or .env file", ENV_IDENTIFIER);
        }
        if key == "default_key" {
            error!("{} not found in environment variables or .env file", ENV_KEY);
        }

        Config {
            credentials: Credentials { identifier, key },
            tier: get_env_or_default(ENV_TIER, Tier::Plugin),
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    ENV_REST_BASE_URL,
                    String::from(DEFAULT_REST_BASE_URL),
                ),
                timeout: get_env_or_default(ENV_REST_TIMEOUT, DEFAULT_REST_TIMEOUT),
            },
        }
    }

    /// Creates a configuration from explicit credentials, using default REST settings
    pub fn with_credentials(identifier: &str, key: &str, tier: Tier) -> Self {
        Config {
            credentials: Credentials {
                identifier: identifier.to_string(),
                key: key.to_string(),
            },
            tier,
            rest_api: RestApiConfig {
                base_url: DEFAULT_REST_BASE_URL.to_string(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
        }
    }

    /// Overrides the REST base URL (useful for tests and proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
