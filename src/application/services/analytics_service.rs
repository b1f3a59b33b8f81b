use crate::application::client::Client;
use crate::application::interfaces::analytics::{AnalyticsPointsFilter, WebsiteAnalyticsService};
use crate::application::services::website::Website;
use crate::error::AppError;
use crate::model::request::QueryParams;
use crate::model::response::ApiResponse;
use crate::presentation::analytics::{
    AnalyticsClassifier, AnalyticsFilter, AnalyticsMetric, AnalyticsPoints,
};
use async_trait::async_trait;

/// Query shared by the analytics endpoints: metric pair and date range
fn metric_query(metric: AnalyticsMetric, date_from: &str, date_to: &str) -> QueryParams {
    QueryParams::new()
        .with("type", metric.point_type().as_str())
        .with("metric", metric.metric())
        .with("date_from", date_from)
        .with("date_to", date_to)
}

#[async_trait]
impl WebsiteAnalyticsService for Website {
    async fn acquire_analytics_points(
        &self,
        website_id: &str,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
        date_split: &str,
        filter: AnalyticsPointsFilter<'_>,
    ) -> Result<ApiResponse<AnalyticsPoints>, AppError> {
        let query = metric_query(metric, date_from, date_to)
            .with("date_split", date_split)
            .with_opt("classifier", filter.classifier)
            .with_opt("filter_primary", filter.filter_primary)
            .with_opt("filter_secondary", filter.filter_secondary)
            .with_opt("filter_tertiary", filter.filter_tertiary);

        let url = Client::prepare_rest_url(&["website", website_id, "analytics", "points"]);
        Ok(self.crisp.get(url, Some(query)).await?.cast())
    }

    async fn list_analytics_filters(
        &self,
        website_id: &str,
        page_number: u32,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
    ) -> Result<ApiResponse<Vec<AnalyticsFilter>>, AppError> {
        let page = page_number.to_string();
        let url = Client::prepare_rest_url(&[
            "website", website_id, "analytics", "filters", "list", page.as_str(),
        ]);
        let query = metric_query(metric, date_from, date_to);
        Ok(self.crisp.get(url, Some(query)).await?.cast())
    }

    async fn list_analytics_classifiers(
        &self,
        website_id: &str,
        page_number: u32,
        metric: AnalyticsMetric,
        date_from: &str,
        date_to: &str,
    ) -> Result<ApiResponse<Vec<AnalyticsClassifier>>, AppError> {
        let page = page_number.to_string();
        let url = Client::prepare_rest_url(&[
            "website", website_id, "analytics", "classifiers", "list", page.as_str(),
        ]);
        let query = metric_query(metric, date_from, date_to);
        Ok(self.crisp.get(url, Some(query)).await?.cast())
    }
}
