// Request/response objects for the API layer
pub mod analytics;
pub mod auth;
pub mod common;
pub mod product;
pub mod user;
