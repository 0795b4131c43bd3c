use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::dto::user::UserResponse;

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address
    #[oai(validator(pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    pub email: String,

    /// Account password
    #[oai(validator(min_length = 1))]
    pub password: String,
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user, without credentials
    pub user: UserResponse,
}
