use crate::application::client::Client;
use crate::application::interfaces::base::WebsiteBaseService;
use crate::application::services::website::Website;
use crate::error::AppError;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::website::{
    DeleteWebsiteBody, NewWebsite, WebsiteCreated, WebsiteDeletionVerify, WebsiteDetails,
};
use async_trait::async_trait;

#[async_trait]
impl WebsiteBaseService for Website {
    async fn create_website(
        &self,
        website: &NewWebsite,
    ) -> Result<ApiResponse<WebsiteCreated>, AppError> {
        let url = Client::prepare_rest_url(&["website"]);
        Ok(self.crisp.post(url, None, Some(website)).await?.cast())
    }

    async fn get_website(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<WebsiteDetails>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn delete_website(
        &self,
        website_id: &str,
        verify: &WebsiteDeletionVerify,
    ) -> Result<ApiResponse<Empty>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id]);
        let body = DeleteWebsiteBody { verify };
        Ok(self.crisp.delete(url, None, Some(&body)).await?.cast())
    }

    async fn abort_website_deletion(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Empty>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "expunge"]);
        Ok(self.crisp.delete(url, None, None::<&()>).await?.cast())
    }
}
