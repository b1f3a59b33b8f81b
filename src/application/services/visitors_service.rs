use crate::application::client::Client;
use crate::application::interfaces::visitors::WebsiteVisitorsService;
use crate::application::services::website::Website;
use crate::error::AppError;
use crate::model::request::QueryParams;
use crate::model::response::{ApiResponse, Empty};
use crate::presentation::visitors::{
    BlockedVisitorsRule, Visitor, VisitorSessionToken, VisitorsCount, VisitorsMapPoint,
};
use async_trait::async_trait;

#[async_trait]
impl WebsiteVisitorsService for Website {
    async fn count_visitors(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<VisitorsCount>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "visitors", "count"]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn list_visitors(
        &self,
        website_id: &str,
        page_number: u32,
    ) -> Result<ApiResponse<Vec<Visitor>>, AppError> {
        let page = page_number.to_string();
        let url = Client::prepare_rest_url(&[
            "website", website_id, "visitors", "list", page.as_str(),
        ]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn pinpoint_visitors_on_map(
        &self,
        website_id: &str,
        center_longitude: Option<f64>,
        center_latitude: Option<f64>,
        center_radius: Option<f64>,
    ) -> Result<ApiResponse<Vec<VisitorsMapPoint>>, AppError> {
        let query = QueryParams::new()
            .with_opt("center_longitude", center_longitude)
            .with_opt("center_latitude", center_latitude)
            .with_opt("center_radius", center_radius);

        let url = Client::prepare_rest_url(&["website", website_id, "visitors", "map"]);
        Ok(self.crisp.get(url, Some(query)).await?.cast())
    }

    async fn get_session_identifier_from_token(
        &self,
        website_id: &str,
        token_id: &str,
    ) -> Result<ApiResponse<VisitorSessionToken>, AppError> {
        let url =
            Client::prepare_rest_url(&["website", website_id, "visitors", "token", token_id]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn count_blocked_visitors(
        &self,
        website_id: &str,
    ) -> Result<ApiResponse<Vec<BlockedVisitorsRule>>, AppError> {
        let url = Client::prepare_rest_url(&["website", website_id, "visitors", "blocked"]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn count_blocked_visitors_in_rule(
        &self,
        website_id: &str,
        rule: &str,
    ) -> Result<ApiResponse<BlockedVisitorsRule>, AppError> {
        let url =
            Client::prepare_rest_url(&["website", website_id, "visitors", "blocked", rule]);
        Ok(self.crisp.get(url, None).await?.cast())
    }

    async fn clear_blocked_visitors_in_rule(
        &self,
        website_id: &str,
        rule: &str,
    ) -> Result<ApiResponse<Empty>, AppError> {
        let url =
            Client::prepare_rest_url(&["website", website_id, "visitors", "blocked", rule]);
        Ok(self.crisp.delete(url, None, None::<&()>).await?.cast())
    }
}
