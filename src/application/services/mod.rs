/// Website analytics resource
pub mod analytics_service;
/// Website availability resource
pub mod availability_service;
/// Website base (CRUD) resource
pub mod base_service;
/// Website batch resource
pub mod batch_service;
/// Website visitors resource
pub mod visitors_service;
/// Website service handle
pub mod website;

pub use crate::application::interfaces::analytics::*;
pub use crate::application::interfaces::availability::*;
pub use crate::application::interfaces::base::*;
pub use crate::application::interfaces::batch::*;
pub use crate::application::interfaces::visitors::*;
pub use website::Website;
