//! # Crisp API Prelude
//!
//! Brings the client, the resource traits and the payload types into scope
//! with a single import:
//!
//! ```rust
//! use crisp_api::prelude::*;
//!
//! let config = Config::with_credentials("identifier", "key", Tier::Plugin);
//! assert_eq!(config.tier.as_str(), "plugin");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig, Tier};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{ApiResult, AppError};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

pub use crate::application::client::Client;
pub use crate::model::http::{HttpTransport, RestHttpClient};
pub use crate::model::request::{QueryParams, QueryValue, RestRequest};
pub use crate::model::response::{ApiResponse, Empty};

// ============================================================================
// RESOURCES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    AnalyticsPointsFilter, Website, WebsiteAnalyticsService, WebsiteAvailabilityService,
    WebsiteBaseService, WebsiteBatchService, WebsiteVisitorsService,
};

// ============================================================================
// PAYLOADS
// ============================================================================

pub use crate::presentation::analytics::*;
pub use crate::presentation::availability::*;
pub use crate::presentation::batch::{
    FilterCombinator, FilterOperator, PeopleFilter, PeopleSearch, PeopleSelection,
};
pub use crate::presentation::visitors::*;
pub use crate::presentation::website::{
    NewWebsite, WebsiteCreated, WebsiteDeletionVerify, WebsiteDetails,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
