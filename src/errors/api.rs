use std::fmt;

use poem_openapi::payload::Json;
use poem_openapi::ApiResponse;

use crate::types::dto::common::ErrorResponse;

/// Authentication error responses
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error. The message is identical for
    /// unknown email and wrong password.
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid credentials".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError. Never carries internal detail.
    pub fn internal_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// User endpoint error responses
#[derive(ApiResponse, Debug)]
pub enum UserError {
    /// Referenced user id does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Email already taken by another user
    #[oai(status = 409)]
    EmailExists(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UserError {
    pub fn not_found() -> Self {
        UserError::NotFound(Json(ErrorResponse {
            error: "user_not_found".to_string(),
            message: "User not found".to_string(),
            status_code: 404,
        }))
    }

    pub fn email_exists() -> Self {
        UserError::EmailExists(Json(ErrorResponse {
            error: "email_exists".to_string(),
            message: "User already exists".to_string(),
            status_code: 409,
        }))
    }

    pub fn internal_error() -> Self {
        UserError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(json) => json.0.message.clone(),
            UserError::EmailExists(json) => json.0.message.clone(),
            UserError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Product endpoint error responses
#[derive(ApiResponse, Debug)]
pub enum ProductError {
    /// Referenced product id does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// SKU already taken by another product
    #[oai(status = 409)]
    SkuExists(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductError {
    pub fn not_found() -> Self {
        ProductError::NotFound(Json(ErrorResponse {
            error: "product_not_found".to_string(),
            message: "Product not found".to_string(),
            status_code: 404,
        }))
    }

    pub fn sku_exists() -> Self {
        ProductError::SkuExists(Json(ErrorResponse {
            error: "sku_exists".to_string(),
            message: "Product with this SKU already exists".to_string(),
            status_code: 409,
        }))
    }

    pub fn internal_error() -> Self {
        ProductError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ProductError::NotFound(json) => json.0.message.clone(),
            ProductError::SkuExists(json) => json.0.message.clone(),
            ProductError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
