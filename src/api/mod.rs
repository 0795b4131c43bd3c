// API layer - HTTP endpoints
pub mod analytics;
pub mod auth;
pub mod health;
pub mod products;
pub mod users;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use health::HealthApi;
pub use products::ProductsApi;
pub use users::UsersApi;
