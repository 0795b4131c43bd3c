use std::sync::Arc;

use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::AuthError;
use crate::stores::UserStore;
use crate::types::dto::auth::{LoginRequest, LoginResponse};

/// Authentication API endpoints
pub struct AuthApi {
    user_store: Arc<UserStore>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: app_data.user_store.clone(),
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password
    ///
    /// Returns the user record without credentials. An unknown email and a
    /// wrong password produce the same response, so callers cannot probe
    /// which accounts exist.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let user = self
            .user_store
            .verify_credentials(&body.email, &body.password)
            .ok_or_else(AuthError::invalid_credentials)?;

        // Stamp the login before the record leaves the boundary.
        let user = self
            .user_store
            .record_login(&user.id)
            .ok_or_else(AuthError::internal_error)?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(Json(LoginResponse { user: user.into() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::user::NewUser;

    fn setup() -> (Arc<AppData>, AuthApi) {
        let app_data = AppData::new();
        app_data
            .user_store
            .create(NewUser {
                email: "admin@example.com".to_string(),
                password: "password".to_string(),
                first_name: "John".to_string(),
                last_name: "Anderson".to_string(),
                role: Some("admin".to_string()),
                status: None,
                avatar: None,
                phone: None,
                bio: None,
            })
            .expect("Failed to create test user");
        let api = AuthApi::new(app_data.clone());
        (app_data, api)
    }

    #[tokio::test]
    async fn login_with_valid_credentials_returns_the_user() {
        let (_app_data, api) = setup();

        let request = Json(LoginRequest {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
        });

        let response = api.login(request).await.expect("login should succeed");

        assert_eq!(response.user.email, "admin@example.com");
        assert_eq!(response.user.role, "admin");
        assert!(response.user.last_login.is_some());
    }

    #[tokio::test]
    async fn login_persists_last_login() {
        let (app_data, api) = setup();

        let request = Json(LoginRequest {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
        });
        let response = api.login(request).await.unwrap();

        let stored = app_data
            .user_store
            .get(&response.user.id)
            .expect("user should still exist");
        assert_eq!(stored.last_login, response.user.last_login);
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let (_app_data, api) = setup();

        let request = Json(LoginRequest {
            email: "admin@example.com".to_string(),
            password: "nope".to_string(),
        });

        let result = api.login(request).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let (_app_data, api) = setup();

        let wrong_password = api
            .login(Json(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "nope".to_string(),
            }))
            .await
            .unwrap_err();

        let unknown_email = api
            .login(Json(LoginRequest {
                email: "ghost@example.com".to_string(),
                password: "password".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.message(), unknown_email.message());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials(_)));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials(_)));
    }
}
