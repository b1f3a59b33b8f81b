//! # crisp-api
//!
//! Typed Rust client for the Crisp messaging platform REST API.
//!
//! Every resource method follows the same convention: it joins literal path
//! segments with the caller's identifiers, attaches an optional query map or
//! JSON body, picks the verb matching the operation (read → GET, delete →
//! DELETE, create → POST, batch update → PATCH) and returns whatever the
//! transport hands back. Application-level failures arrive in-band as an
//! [`ApiResponse`](model::response::ApiResponse) with `error: true`;
//! transport failures arrive as [`AppError`](error::AppError).
//!
//! ## Usage
//!
//! ```ignore
//! use crisp_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     // Reads CRISP_IDENTIFIER, CRISP_KEY and CRISP_TIER (and a .env file)
//!     let client = Client::from_config(Config::new())?;
//!     let website = client.website();
//!
//!     let visitors = website.list_visitors("8c842203-7ed8-4e29-a608-7cf78a7d2fcc", 1).await?;
//!     if visitors.is_error() {
//!         eprintln!("request refused: {}", visitors.reason);
//!     } else {
//!         for visitor in visitors.data()? {
//!             println!("{}", visitor.session_id);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transport
//!
//! [`Client::new`](application::client::Client::new) accepts any
//! [`HttpTransport`](model::http::HttpTransport), which makes it possible to
//! route requests through a proxy layer or to record them in tests.

/// Client façade, configuration and resources
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, request descriptor and response envelope
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Typed response payloads
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
