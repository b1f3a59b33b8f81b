// Shared helpers for unit tests: a transport that records requests

use async_trait::async_trait;
use crisp_api::prelude::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const WEBSITE_ID: &str = "8c842203-7ed8-4e29-a608-7cf78a7d2fcc";

/// What the recording transport answers with
pub enum Reply {
    Envelope(ApiResponse<Value>),
    Failure(fn() -> AppError),
}

/// Transport recording every request and answering with a canned reply
pub struct RecordingTransport {
    requests: Mutex<Vec<RestRequest>>,
    reply: Reply,
}

impl RecordingTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn answering(data: Value) -> Arc<Self> {
        Self::new(Reply::Envelope(ApiResponse::new(false, "resolved", data)))
    }

    pub fn requests(&self) -> Vec<RestRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RestRequest {
        self.requests()
            .pop()
            .expect("transport did not receive any request")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: RestRequest) -> ApiResult<ApiResponse<Value>> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Envelope(envelope) => Ok(envelope.clone()),
            Reply::Failure(make_error) => Err(make_error()),
        }
    }
}

/// Website service on top of a recording transport
pub fn website_with(transport: &Arc<RecordingTransport>) -> Website {
    let transport: Arc<dyn HttpTransport> = transport.clone();
    Client::new(transport).website()
}

/// Envelope the platform sends for unknown resources
pub fn not_found_envelope() -> ApiResponse<Value> {
    ApiResponse::new(true, "not_found", json!({}))
}
