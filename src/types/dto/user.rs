use chrono::{DateTime, Utc};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::model::user::{NewUser, User, UserPatch};

/// User record as it leaves the API boundary. Credentials are stripped by
/// construction; there is no password field to leak.
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub status: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    /// Set on first successful login, null before that
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            status: user.status,
            avatar: user.avatar,
            phone: user.phone,
            bio: user.bio,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

/// Request model for creating a user
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Email address, unique across users
    #[oai(validator(pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    pub email: String,

    /// Initial password, hashed before storage
    #[oai(validator(min_length = 1))]
    pub password: String,

    #[oai(validator(min_length = 1))]
    pub first_name: String,

    #[oai(validator(min_length = 1))]
    pub last_name: String,

    /// Role label; defaults to "user"
    pub role: Option<String>,

    /// Account status; defaults to "active"
    pub status: Option<String>,

    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            status: request.status,
            avatar: request.avatar,
            phone: request.phone,
            bio: request.bio,
        }
    }
}

/// Request model for partially updating a user.
///
/// Absent fields are left untouched; present fields obey the same
/// constraints as on create.
#[derive(Object, Debug, Serialize, Deserialize, Default)]
#[oai(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[oai(validator(pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    pub email: Option<String>,

    #[oai(validator(min_length = 1))]
    pub password: Option<String>,

    #[oai(validator(min_length = 1))]
    pub first_name: Option<String>,

    #[oai(validator(min_length = 1))]
    pub last_name: Option<String>,

    pub role: Option<String>,
    pub status: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            status: request.status,
            avatar: request.avatar,
            phone: request.phone,
            bio: request.bio,
        }
    }
}

/// Response for user creation
#[derive(ApiResponse)]
pub enum CreateUserApiResponse {
    /// User created
    #[oai(status = 201)]
    Created(Json<UserResponse>),
}

/// Response for user deletion
#[derive(ApiResponse)]
pub enum DeleteUserApiResponse {
    /// User removed, no body
    #[oai(status = 204)]
    Deleted,
}
