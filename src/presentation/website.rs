use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of a website creation request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct NewWebsite {
    /// Website name
    pub name: String,
    /// Website domain
    pub domain: String,
}

impl NewWebsite {
    /// Creates a new website description
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
        }
    }
}

/// Identifier of a freshly created website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebsiteCreated {
    /// Website identifier
    pub website_id: String,
}

/// Website details
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebsiteDetails {
    /// Website identifier
    pub website_id: String,
    /// Website name
    pub name: String,
    /// Website domain
    pub domain: String,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
}

/// Proof of ownership required to delete a website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebsiteDeletionVerify {
    /// Verification method, e.g. `password`
    pub method: String,
    /// Verification secret
    pub secret: String,
}

impl WebsiteDeletionVerify {
    /// Verification by account password
    pub fn password(secret: &str) -> Self {
        Self {
            method: "password".to_string(),
            secret: secret.to_string(),
        }
    }
}

/// Body of a website deletion request
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DeleteWebsiteBody<'a> {
    pub verify: &'a WebsiteDeletionVerify,
}
