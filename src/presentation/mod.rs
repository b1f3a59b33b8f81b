/// Analytics point types, metrics and payloads
pub mod analytics;
/// Website and operator availability payloads
pub mod availability;
/// Batch operation selections and filters
pub mod batch;
/// Visitor payloads
pub mod visitors;
/// Website CRUD payloads
pub mod website;
