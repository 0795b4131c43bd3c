use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::UserError;
use crate::stores::{StoreError, UserStore};
use crate::types::dto::user::{
    CreateUserApiResponse, CreateUserRequest, DeleteUserApiResponse, UpdateUserRequest,
    UserResponse,
};

/// User management API endpoints
pub struct UsersApi {
    user_store: Arc<UserStore>,
}

impl UsersApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: app_data.user_store.clone(),
        }
    }
}

/// API tags for user endpoints
#[derive(Tags)]
enum ApiTags {
    /// User management endpoints
    Users,
}

#[OpenApi(prefix_path = "/users")]
impl UsersApi {
    /// List all users
    #[oai(path = "/", method = "get", tag = "ApiTags::Users")]
    async fn list_users(&self) -> Json<Vec<UserResponse>> {
        Json(
            self.user_store
                .list()
                .into_iter()
                .map(UserResponse::from)
                .collect(),
        )
    }

    /// Fetch a single user by id
    #[oai(path = "/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user(&self, id: Path<String>) -> Result<Json<UserResponse>, UserError> {
        self.user_store
            .get(&id.0)
            .map(|user| Json(user.into()))
            .ok_or_else(UserError::not_found)
    }

    /// Create a user
    ///
    /// Fails with a conflict when the email is already taken.
    #[oai(path = "/", method = "post", tag = "ApiTags::Users")]
    async fn create_user(
        &self,
        body: Json<CreateUserRequest>,
    ) -> Result<CreateUserApiResponse, UserError> {
        match self.user_store.create(body.0.into()) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "user created");
                Ok(CreateUserApiResponse::Created(Json(user.into())))
            }
            Err(StoreError::DuplicateKey { .. }) => Err(UserError::email_exists()),
            Err(err) => {
                tracing::error!(error = %err, "user creation failed");
                Err(UserError::internal_error())
            }
        }
    }

    /// Partially update a user
    ///
    /// Only the supplied fields change; `id` and `createdAt` never do.
    #[oai(path = "/:id", method = "patch", tag = "ApiTags::Users")]
    async fn update_user(
        &self,
        id: Path<String>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, UserError> {
        match self.user_store.update(&id.0, body.0.into()) {
            Ok(Some(user)) => Ok(Json(user.into())),
            Ok(None) => Err(UserError::not_found()),
            Err(err) => {
                tracing::error!(error = %err, user_id = %id.0, "user update failed");
                Err(UserError::internal_error())
            }
        }
    }

    /// Delete a user
    #[oai(path = "/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<String>) -> Result<DeleteUserApiResponse, UserError> {
        if self.user_store.delete(&id.0) {
            tracing::info!(user_id = %id.0, "user deleted");
            Ok(DeleteUserApiResponse::Deleted)
        } else {
            Err(UserError::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Arc<AppData>, UsersApi) {
        let app_data = AppData::new();
        let api = UsersApi::new(app_data.clone());
        (app_data, api)
    }

    fn create_request(email: &str) -> Json<CreateUserRequest> {
        Json(CreateUserRequest {
            email: email.to_string(),
            password: "secret".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: None,
            status: None,
            avatar: None,
            phone: None,
            bio: None,
        })
    }

    #[tokio::test]
    async fn create_user_returns_created_with_defaults() {
        let (_app_data, api) = setup();

        let response = api
            .create_user(create_request("grace@example.com"))
            .await
            .expect("create should succeed");

        let CreateUserApiResponse::Created(user) = response;
        assert!(!user.id.is_empty());
        assert_eq!(user.role, "user");
        assert_eq!(user.status, "active");
        assert!(user.last_login.is_none());
    }

    #[tokio::test]
    async fn create_user_with_taken_email_conflicts() {
        let (_app_data, api) = setup();
        api.create_user(create_request("grace@example.com"))
            .await
            .unwrap();

        let result = api.create_user(create_request("grace@example.com")).await;

        assert!(matches!(result, Err(UserError::EmailExists(_))));
    }

    #[tokio::test]
    async fn get_unknown_user_is_not_found() {
        let (_app_data, api) = setup();

        let result = api.get_user(Path("missing".to_string())).await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_returns_the_stored_user() {
        let (_app_data, api) = setup();
        let CreateUserApiResponse::Created(created) = api
            .create_user(create_request("grace@example.com"))
            .await
            .unwrap();

        let fetched = api.get_user(Path(created.id.clone())).await.unwrap();

        assert_eq!(fetched.email, "grace@example.com");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn update_merges_supplied_fields() {
        let (_app_data, api) = setup();
        let CreateUserApiResponse::Created(created) = api
            .create_user(create_request("grace@example.com"))
            .await
            .unwrap();

        let patch = Json(UpdateUserRequest {
            role: Some("manager".to_string()),
            ..UpdateUserRequest::default()
        });
        let updated = api.update_user(Path(created.id.clone()), patch).await.unwrap();

        assert_eq!(updated.role, "manager");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let (_app_data, api) = setup();

        let result = api
            .update_user(
                Path("missing".to_string()),
                Json(UpdateUserRequest::default()),
            )
            .await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_not_found() {
        let (_app_data, api) = setup();
        let CreateUserApiResponse::Created(created) = api
            .create_user(create_request("grace@example.com"))
            .await
            .unwrap();

        let first = api.delete_user(Path(created.id.clone())).await;
        assert!(matches!(first, Ok(DeleteUserApiResponse::Deleted)));

        let second = api.delete_user(Path(created.id.clone())).await;
        assert!(matches!(second, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_every_user() {
        let (_app_data, api) = setup();
        api.create_user(create_request("a@example.com")).await.unwrap();
        api.create_user(create_request("b@example.com")).await.unwrap();

        let listed = api.list_users().await;

        assert_eq!(listed.len(), 2);
    }
}
