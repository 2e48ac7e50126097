pub mod auth_provider;
pub mod client;
