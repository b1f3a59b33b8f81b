use crate::error::AppError;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::visitors::{
    BlockedVisitorsRule, Visitor, VisitorSessionToken, VisitorsCount, VisitorsMapPoint,
};
use async_trait::async_trait;

/// Interface for the website visitors resource
#[async_trait]
pub trait WebsiteVisitorsService: Send + Sync {
    /// Counts visitors currently browsing a website
    async fn count_visitors(&self, website_id: &str)
    -> Result<ApiResponse<VisitorsCount>, AppError>;

    /// Lists visitors currently browsing a website, one page at a time
    async fn list_visitors(
        &self,
        website_id: &str,
        page_number: u32,
    ) -> Result<ApiResponse<Vec<Visitor>>, AppError>;

    /// Pinpoints visitors on a map, optionally around a center
    ///
    /// # Arguments
    /// * `website_id` - Website identifier
    /// * `center_longitude` - Longitude of the map center, in degrees
    /// * `center_latitude` - Latitude of the map center, in degrees
    /// * `center_radius` - Radius around the center, in meters
    ///
    /// Each center argument is sent only when supplied.
    async fn pinpoint_visitors_on_map(
        &self,
        website_id: &str,
        center_longitude: Option<f64>,
        center_latitude: Option<f64>,
        center_radius: Option<f64>,
    ) -> Result<ApiResponse<Vec<VisitorsMapPoint>>, AppError>;

    /// Resolves the session identifier bound to a visitor token
    async fn get_session_identifier_from_token(
        &self,
        website_id: &str,
        token_id: &str,
    ) -> Result<ApiResponse<VisitorSessionToken>, AppError>;

    /// Counts blocked visitors, per blocking rule
    async fn count_blocked_visitors(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Vec<BlockedVisitorsRule>>, AppError>;

    /// Counts visitors blocked by one rule
    async fn count_blocked_visitors_in_rule(
        &self,
        website_id: &str,
        rule: &str,
    ) -> Result<ApiResponse<BlockedVisitorsRule>, AppError>;

    /// Clears every visitor blocked by one rule
    async fn clear_blocked_visitors_in_rule(
        &self,
        website_id: &str,
        rule: &str,
    ) -> Result<ApiResponse<Empty>, AppError>;
}
