use crate::application::client::Client;

/// Website service: every `website/{id}/...` resource of the REST API.
///
/// Resource methods come from the interface traits implemented on this type
/// (`WebsiteAnalyticsService`, `WebsiteAvailabilityService`,
/// `WebsiteBaseService`, `WebsiteBatchService`, `WebsiteVisitorsService`).
/// Each one builds its path and query, picks a verb and returns the
/// transport's answer untouched.
#[derive(Clone)]
pub struct Website {
    pub(crate) crisp: Client,
}

impl Website {
    /// Creates the service on top of a client handle
    pub fn new(crisp: Client) -> Self {
        Self { crisp }
    }
}
