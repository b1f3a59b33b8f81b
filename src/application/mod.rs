/// Client façade
pub mod client;
/// Application configuration module
pub mod config;
/// Resource interfaces
pub mod interfaces;
/// Resource implementations
pub mod services;
