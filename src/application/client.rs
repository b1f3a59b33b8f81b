//! Client façade shared by every resource
//!
//! The façade owns an injected [`HttpTransport`] and exposes the primitives
//! resources are written against: a path builder and one method per verb.
//!
//! # Example
//! ```ignore
//! use crisp_api::prelude::*;
//!
//! let client = Client::from_config(Config::new())?;
//! let count = client.website().count_visitors("8c842203-7ed8-4e29-a608-7cf78a7d2fcc").await?;
//! if !count.is_error() {
//!     println!("{}", count.data()?.count);
//! }
//! ```

use crate::application::config::Config;
use crate::application::services::Website;
use crate::error::{ApiResult, AppError};
use crate::model::http::{HttpTransport, RestHttpClient};
use crate::model::request::{QueryParams, RestRequest};
use crate::model::response::ApiResponse;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Handle to the Crisp REST API.
///
/// Cheap to clone; clones share the same transport. Calls are independent
/// and may be issued concurrently.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Creates a client on top of an explicit transport
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Creates a client backed by the reqwest transport
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let transport = RestHttpClient::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Website service (analytics, availability, base, batch, visitors)
    pub fn website(&self) -> Website {
        Website::new(self.clone())
    }

    /// Joins path segments with `/`, in order and verbatim
    ///
    /// ```
    /// # use crisp_api::application::client::Client;
    /// assert_eq!(
    ///     Client::prepare_rest_url(&["website", "42", "visitors", "count"]),
    ///     "website/42/visitors/count"
    /// );
    /// ```
    pub fn prepare_rest_url(segments: &[&str]) -> String {
        segments.join("/")
    }

    /// Makes a GET request
    pub async fn get(
        &self,
        url: String,
        query: Option<QueryParams>,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::GET, url, query, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: String,
        query: Option<QueryParams>,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::POST, url, query, body).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: String,
        query: Option<QueryParams>,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::PUT, url, query, body).await
    }

    /// Makes a PATCH request
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        url: String,
        query: Option<QueryParams>,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::PATCH, url, query, body).await
    }

    /// Makes a DELETE request
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        url: String,
        query: Option<QueryParams>,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::DELETE, url, query, body).await
    }

    /// Builds the request descriptor and hands it to the transport
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: String,
        query: Option<QueryParams>,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<Value>> {
        let body = match body {
            Some(b) => Some(serde_json::to_value(b).map_err(|e| {
                warn!("Could not serialize body for {} {}: {}", method, url, e);
                AppError::Serialization(e.to_string())
            })?),
            None => None,
        };

        let request = RestRequest::new(method, url)
            .with_query(query)
            .with_body(body);

        self.transport.execute(request).await
    }
}

impl Default for Client {
    /// Client configured from the environment.
    ///
    /// # Panics
    /// If the HTTP client cannot be built (TLS backend initialisation failure).
    fn default() -> Self {
        Self::from_config(Config::default()).expect("Failed to create HTTP client")
    }
}
