use crate::error::AppError;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::batch::PeopleSelection;
use async_trait::async_trait;

/// Interface for the website batch resource
#[async_trait]
pub trait WebsiteBatchService: Send + Sync {
    /// Marks conversations as resolved
    async fn batch_resolve_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError>;

    /// Marks conversations as read
    async fn batch_read_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError>;

    /// Removes conversations
    async fn batch_remove_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError>;

    /// Removes people profiles, by identifier or by search
    async fn batch_remove_people(
        &self,
        website_id: &str,
        people: &PeopleSelection,
    ) -> Result<ApiResponse<Empty>, AppError>;
}
