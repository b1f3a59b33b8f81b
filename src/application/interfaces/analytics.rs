use crate::error::AppError;
use crate::model::response::ApiResponse;
use crate::presentation::analytics::{
    AnalyticsClassifier, AnalyticsFilter, AnalyticsMetric, AnalyticsPoints,
};
use async_trait::async_trait;

/// Optional refinements of an analytics points query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsPointsFilter<'a> {
    /// Classifier to split the points by
    pub classifier: Option<&'a str>,
    /// Primary filter value
    pub filter_primary: Option<&'a str>,
    /// Secondary filter value
    pub filter_secondary: Option<&'a str>,
    /// Tertiary filter value
    pub filter_tertiary: Option<&'a str>,
}

impl<'a> AnalyticsPointsFilter<'a> {
    /// Set the classifier
    pub fn with_classifier(mut self, classifier: &'a str) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the primary filter
    pub fn with_primary(mut self, value: &'a str) -> Self {
        self.filter_primary = Some(value);
        self
    }

    /// Set the secondary filter
    pub fn with_secondary(mut self, value: &'a str) -> Self {
        self.filter_secondary = Some(value);
        self
    }

    /// Set the tertiary filter
    pub fn with_tertiary(mut self, value: &'a str) -> Self {
        self.filter_tertiary = Some(value);
        self
    }
}

/// Interface for the website analytics resource
#[async_trait]
pub trait WebsiteAnalyticsService: Send + Sync {
    /// Acquires analytics points for a metric over a date range
    ///
    /// # Arguments
    /// * `website_id` - Website identifier
    /// * `metric` - Point type and metric pair
    /// * `date_from` - Range start (ISO 8601)
    /// * `date_to` - Range end (ISO 8601)
    /// * `date_split` - Split granularity (e.g. `hour`, `day`, `week`, `month`)
    /// * `filter` - Optional classifier and filters
    async fn acquire_analytics_points(
        &self,
        website_id: &str,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
        date_split: &str,
        filter: AnalyticsPointsFilter<'_>,
    ) -> Result<ApiResponse<AnalyticsPoints>, AppError>;

    /// Lists filter values available for a metric over a date range
    async fn list_analytics_filters(
        &self,
        website_id: &str,
        page_number: u32,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
    ) -> Result<ApiResponse<Vec<AnalyticsFilter>>, AppError>;

    /// Lists classifiers available for a metric over a date range
    async fn list_analytics_classifiers(
        &self,
        website_id: &str,
        page_number: u32,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
    ) -> Result<ApiResponse<Vec<AnalyticsClassifier>>, AppError>;
}
