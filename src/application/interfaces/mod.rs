/// Website analytics interface
pub mod analytics;
/// Website availability interface
pub mod availability;
/// Website base (CRUD) interface
pub mod base;
/// Website batch interface
pub mod batch;
/// Website visitors interface
pub mod visitors;
