/// HTTP transport trait and its reqwest implementation
pub mod http;
/// Request descriptor and query parameter helpers
pub mod request;
/// Response envelope
pub mod response;
