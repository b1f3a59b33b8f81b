use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Visitor counters for a website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorsCount {
    /// Number of visitors currently browsing the website
    pub count: u32,
    /// Number of visitors with an active chat session
    #[serde(default)]
    pub active: u32,
    /// Whether the count hit the plan limit
    #[serde(default)]
    pub limited: bool,
}

/// A visitor currently browsing a website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Visitor {
    /// Session identifier of the visitor
    pub session_id: String,
    /// Inbox the session is routed to
    #[serde(default)]
    pub inbox_id: Option<String>,
    /// Visitor nickname
    #[serde(default)]
    pub nickname: Option<String>,
    /// Visitor email
    #[serde(default)]
    pub email: Option<String>,
    /// Visitor avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Browser user agent
    #[serde(default)]
    pub useragent: Option<String>,
    /// Whether a conversation was started
    #[serde(default)]
    pub initiated: bool,
    /// Activity state
    #[serde(default)]
    pub active: Option<VisitorActivity>,
    /// Last page viewed
    #[serde(default)]
    pub last_page: Option<VisitorLastPage>,
    /// Geolocation derived from the visitor IP
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
    /// Timezone offset, in minutes
    #[serde(default)]
    pub timezone: Option<i32>,
    /// Browser capabilities
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Preferred locales
    #[serde(default)]
    pub locales: Vec<String>,
}

/// Activity state of a visitor
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorActivity {
    /// Whether the visitor is on the website right now
    pub now: bool,
    /// Last activity timestamp, in milliseconds
    #[serde(default)]
    pub last: Option<u64>,
}

/// Last page viewed by a visitor
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorLastPage {
    /// Page title
    #[serde(default)]
    pub page_title: Option<String>,
    /// Page URL
    #[serde(default)]
    pub page_url: Option<String>,
}

/// Geolocation of a visitor or a map cluster
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Geolocation {
    /// Coordinates
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// City name
    #[serde(default)]
    pub city: Option<String>,
    /// Region name
    #[serde(default)]
    pub region: Option<String>,
    /// Country code
    #[serde(default)]
    pub country: Option<String>,
}

/// Latitude and longitude pair
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// One cluster of visitors on the map
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorsMapPoint {
    /// Visitors aggregated in this cluster
    pub visitors: VisitorsMapCluster,
    /// Center of the cluster
    pub center: Coordinates,
    /// Geolocation of the cluster center
    #[serde(default)]
    pub geolocation: Option<Geolocation>,
}

/// Visitor aggregate of a map cluster
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorsMapCluster {
    /// Number of visitors in the cluster
    pub count: u32,
    /// Cluster size threshold used by the server
    #[serde(default)]
    pub threshold: u32,
    /// Sessions in the cluster, when under the threshold
    #[serde(default)]
    pub sessions: Vec<Visitor>,
}

/// Session identifier resolved from a visitor token
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VisitorSessionToken {
    /// Session identifier
    pub session_id: String,
}

/// Number of visitors blocked by a rule
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BlockedVisitorsRule {
    /// Blocking rule name (e.g. `ip_range`, `country`, `locale`)
    pub rule: String,
    /// Number of blocked visitors
    pub count: u32,
}
