use crate::error::AppError;
use crate::model::response::ApiResponse;
use crate::presentation::availability::{OperatorAvailability, WebsiteAvailability};
use async_trait::async_trait;

/// Interface for the website availability resource
#[async_trait]
pub trait WebsiteAvailabilityService: Send + Sync {
    /// Gets the availability status of a website
    async fn get_website_availability_status(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<WebsiteAvailability>, AppError>;

    /// Lists the availability of every operator of a website
    async fn list_website_operator_availabilities(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Vec<OperatorAvailability>>, AppError>;
}
