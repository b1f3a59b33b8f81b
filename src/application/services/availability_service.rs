use crate::application::client::Client;
use crate::application::interfaces::availability::WebsiteAvailabilityService;
use crate::application::services::website::Website;
use crate::error::AppError;
use crate::model::response::ApiResponse;
use crate::presentation::availability::{OperatorAvailability, WebsiteAvailability};
use async_trait::async_trait;

#[async_trait]
impl WebsiteAvailabilityService for Website {
    async fn get_website_availability_status(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<WebsiteAvailability>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "availability", "status"]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn list_website_operator_availabilities(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Vec<OperatorAvailability>>, AppError> {
        let url =
            Client::prepare_rest_url(&["website", website_id, "availabilities", "operators"]);
        Ok(self.crisp.get(url, None).await?.cast())
    }
}
