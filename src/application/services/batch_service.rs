use crate::application::client::Client;
use crate::application::interfaces::batch::WebsiteBatchService;
use crate::application::services::website::Website;
use crate::error::AppError;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::batch::{BatchPeopleBody, BatchSessionsBody, PeopleSelection};
use async_trait::async_trait;

impl Website {
    async fn batch_sessions(
        &self,
        website_id: &str,
        action: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "batch", action]);
        let body = BatchSessionsBody { sessions };
        Ok(self.crisp.patch(url, None, Some(&body)).await?.cast())
    }
}

#[async_trait]
impl WebsiteBatchService for Website {
    async fn batch_resolve_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError> {
        self.batch_sessions(website_id, "resolve", sessions).await
    }

    async fn batch_read_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError> {
        self.batch_sessions(website_id, "read", sessions).await
    }

    async fn batch_remove_conversations(
        &self,
        website_id: &str,
        sessions: &[&str],
    ) -> Result<ApiResponse<Empty>, AppError> {
        self.batch_sessions(website_id, "remove", sessions).await
    }

    async fn batch_remove_people(
        &self,
        website_id: &str,
        people: &PeopleSelection,
    ) -> Result<ApiResponse<Empty>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "batch", "remove"]);
        let body = BatchPeopleBody { people };
        Ok(self.crisp.patch(url, None, Some(&body)).await?.cast())
    }
}
