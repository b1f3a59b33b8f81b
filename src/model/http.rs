use crate::application::config::Config;
use crate::constants::{TIER_HEADER, USER_AGENT};
use crate::error::{ApiResult, AppError};
use crate::model::request::RestRequest;
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Executes REST requests on behalf of the client façade.
///
/// Implementations own everything below the request descriptor: base URL,
/// headers, authentication, connection reuse. They must hand back the
/// envelope as received and surface failures without retrying.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends one request and returns the parsed envelope
    async fn execute(&self, request: RestRequest) -> ApiResult<ApiResponse<Value>>;
}

/// Reqwest-backed transport talking to the Crisp REST API
pub struct RestHttpClient {
    http_client: Client,
    config: Config,
}

impl RestHttpClient {
    /// Creates a transport from a configuration
    ///
    /// # Returns
    /// * `Ok(RestHttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Full URL for a path relative to the API base
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpTransport for RestHttpClient {
    async fn execute(&self, request: RestRequest) -> ApiResult<ApiResponse<Value>> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), &url)
            .basic_auth(
                &self.config.credentials.identifier,
                Some(&self.config.credentials.key),
            )
            .header(TIER_HEADER, self.config.tier.as_str())
            .header("Accept", "application/json");

        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("{} {} failed: {}", request.method, url, e);
            AppError::Network(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;

        match serde_json::from_str::<ApiResponse<Value>>(&body) {
            Ok(envelope) => {
                if envelope.is_error() {
                    debug!(
                        "{} {} answered error envelope: {}",
                        request.method, url, envelope.reason
                    );
                }
                Ok(envelope)
            }
            Err(_) if !status.is_success() => {
                error!("Request failed with status {}: {}", status, body);
                Err(AppError::Unexpected(status))
            }
            Err(e) => {
                error!("Could not parse response envelope from {}: {}", url, e);
                Err(AppError::Deserialization(e.to_string()))
            }
        }
    }
}
