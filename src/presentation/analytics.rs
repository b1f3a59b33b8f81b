use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of analytics points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    /// Conversation analytics
    Conversation,
    /// Visitor analytics
    Visitor,
    /// People (CRM) analytics
    People,
    /// Campaign analytics
    Campaign,
    /// Helpdesk analytics
    Helpdesk,
    /// Status page analytics
    Status,
}

impl PointType {
    /// Wire name of the point type
    pub fn as_str(&self) -> &'static str {
        match self {
            PointType::Conversation => "conversation",
            PointType::Visitor => "visitor",
            PointType::People => "people",
            PointType::Campaign => "campaign",
            PointType::Helpdesk => "helpdesk",
            PointType::Status => "status",
        }
    }
}

/// Metrics available for conversation points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConversationPointMetric {
    /// Conversations created
    Created,
    /// Operator responsiveness
    Responsiveness,
    /// Segment usage
    Segment,
    /// Shortcut usage
    Shortcut,
    /// Conversations assigned
    Assigned,
}

/// Metrics available for visitor points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VisitorPointMetric {
    /// Trigger hits
    Trigger,
    /// Visit heatmap
    Heatmap,
    /// Visit calendar
    Calendar,
}

/// Metrics available for people points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PeoplePointMetric {
    /// Profiles created
    Created,
    /// Ratings left
    Rating,
}

/// Metrics available for campaign points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CampaignPointMetric {
    /// Messages sent
    Sent,
    /// Recipient activity
    Activity,
}

/// Metrics available for helpdesk points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HelpdeskPointMetric {
    /// Article reads
    Read,
    /// Searches
    Search,
}

/// Metrics available for status points
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusPointMetric {
    /// Downtime
    Downtime,
    /// Latency
    Latency,
}

/// A point type together with one of its metrics.
///
/// Only valid type/metric pairs can be built, e.g.
/// `AnalyticsMetric::Visitor(VisitorPointMetric::Heatmap)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnalyticsMetric {
    /// `conversation` points
    Conversation(ConversationPointMetric),
    /// `visitor` points
    Visitor(VisitorPointMetric),
    /// `people` points
    People(PeoplePointMetric),
    /// `campaign` points
    Campaign(CampaignPointMetric),
    /// `helpdesk` points
    Helpdesk(HelpdeskPointMetric),
    /// `status` points
    Status(StatusPointMetric),
}

impl AnalyticsMetric {
    /// Point type half of the pair
    pub fn point_type(&self) -> PointType {
        match self {
            AnalyticsMetric::Conversation(_) => PointType::Conversation,
            AnalyticsMetric::Visitor(_) => PointType::Visitor,
            AnalyticsMetric::People(_) => PointType::People,
            AnalyticsMetric::Campaign(_) => PointType::Campaign,
            AnalyticsMetric::Helpdesk(_) => PointType::Helpdesk,
            AnalyticsMetric::Status(_) => PointType::Status,
        }
    }

    /// Wire name of the metric half of the pair
    pub fn metric(&self) -> &'static str {
        match self {
            AnalyticsMetric::Conversation(m) => match m {
                ConversationPointMetric::Created => "created",
                ConversationPointMetric::Responsiveness => "responsiveness",
                ConversationPointMetric::Segment => "segment",
                ConversationPointMetric::Shortcut => "shortcut",
                ConversationPointMetric::Assigned => "assigned",
            },
            AnalyticsMetric::Visitor(m) => match m {
                VisitorPointMetric::Trigger => "trigger",
                VisitorPointMetric::Heatmap => "heatmap",
                VisitorPointMetric::Calendar => "calendar",
            },
            AnalyticsMetric::People(m) => match m {
                PeoplePointMetric::Created => "created",
                PeoplePointMetric::Rating => "rating",
            },
            AnalyticsMetric::Campaign(m) => match m {
                CampaignPointMetric::Sent => "sent",
                CampaignPointMetric::Activity => "activity",
            },
            AnalyticsMetric::Helpdesk(m) => match m {
                HelpdeskPointMetric::Read => "read",
                HelpdeskPointMetric::Search => "search",
            },
            AnalyticsMetric::Status(m) => match m {
                StatusPointMetric::Downtime => "downtime",
                StatusPointMetric::Latency => "latency",
            },
        }
    }
}

impl fmt::Display for AnalyticsMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.point_type().as_str(), self.metric())
    }
}

/// How analytics values are aggregated over a split
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    /// Values are averaged
    Average,
    /// Values are summed
    Summation,
}

/// Result of an analytics points query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsPoints {
    /// Pipeline used to compute the points
    pub pipeline: AnalyticsPipeline,
    /// Computed points, one per split
    pub points: Vec<AnalyticsPoint>,
}

/// Pipeline description of an analytics query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsPipeline {
    /// Aggregation function
    pub aggregator: Aggregator,
}

/// One analytics point
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsPoint {
    /// Aggregated value
    pub value: f64,
    /// Number of hits behind the value
    pub hits: u64,
    /// Time span covered by the point
    pub date: AnalyticsDateSpan,
}

/// Time span of an analytics point, in milliseconds since epoch
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsDateSpan {
    /// Span start
    pub from: u64,
    /// Span end
    pub to: u64,
}

/// Filter values available for an analytics metric
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsFilter {
    /// Primary filter value
    pub primary: String,
    /// Secondary filter value
    pub secondary: String,
    /// Tertiary filter value
    pub tertiary: String,
    /// Aggregated value for this filter combination
    pub aggregated: f64,
}

/// Classifier available for an analytics metric
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsClassifier {
    /// Classifier name
    pub classifier: String,
    /// Aggregated value for this classifier
    pub aggregated: f64,
}
