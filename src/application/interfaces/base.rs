use crate::error::AppError;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::website::{
    NewWebsite, WebsiteCreated, WebsiteDeletionVerify, WebsiteDetails,
};
use async_trait::async_trait;

/// Interface for the website base resource (website CRUD)
#[async_trait]
pub trait WebsiteBaseService: Send + Sync {
    /// Creates a website
    async fn create_website(
        &self,
        website: &NewWebsite,
    ) -> Result<ApiResponse<WebsiteCreated>, AppError>;

    /// Gets a website
    async fn get_website(&self, website_id: &str)
    -> Result<ApiResponse<WebsiteDetails>, AppError>;

    /// Schedules a website for deletion
    async fn delete_website(
        &self,
        website_id: &str,
        verify: &WebsiteDeletionVerify,
    ) -> Result<ApiResponse<Empty>, AppError>;

    /// Aborts a scheduled website deletion
    async fn abort_website_deletion(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Empty>, AppError>;
}
