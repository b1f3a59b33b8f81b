/// Default base URL of the Crisp REST API (version 1)
pub const DEFAULT_REST_BASE_URL: &str = "https://api.crisp.chat/v1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Crisp API
pub const USER_AGENT: &str = concat!("crisp-api-rust/", env!("CARGO_PKG_VERSION"));
/// Header carrying the authentication tier of the token pair
pub const TIER_HEADER: &str = "X-Crisp-Tier";

/// Environment variable holding the token identifier
pub const ENV_IDENTIFIER: &str = "CRISP_IDENTIFIER";
/// Environment variable holding the token key
pub const ENV_KEY: &str = "CRISP_KEY";
/// Environment variable holding the token tier (`user` or `plugin`)
pub const ENV_TIER: &str = "CRISP_TIER";
/// Environment variable overriding the REST base URL
pub const ENV_REST_BASE_URL: &str = "CRISP_REST_BASE_URL";
/// Environment variable overriding the REST timeout, in seconds
pub const ENV_REST_TIMEOUT: &str = "CRISP_REST_TIMEOUT";
