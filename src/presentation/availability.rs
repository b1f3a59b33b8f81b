use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Availability of a website or an operator
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// At least one operator is online
    Online,
    /// Operators are away
    Away,
    /// Nobody is available
    Offline,
}

/// Availability of a website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebsiteAvailability {
    /// Current status
    pub status: AvailabilityStatus,
    /// Timestamp of the last status change, in milliseconds
    #[serde(default)]
    pub since: Option<u64>,
}

/// Availability of one operator of a website
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OperatorAvailability {
    /// Operator user identifier
    pub user_id: String,
    /// Current status
    #[serde(rename = "type")]
    pub availability_type: AvailabilityStatus,
    /// Timing of the current status
    pub time: OperatorAvailabilityTime,
}

/// Timing of an operator availability
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatorAvailabilityTime {
    /// Duration the status is set for, in seconds (0 when unbounded)
    #[serde(rename = "for")]
    pub for_duration: u64,
    /// Timestamp of the status change, in milliseconds
    pub since: u64,
}
