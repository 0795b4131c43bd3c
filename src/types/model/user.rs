use chrono::{DateTime, Utc};

/// A stored user account.
///
/// `password_hash` is an Argon2id PHC string and never crosses the API
/// boundary; response shaping strips credentials by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub status: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user.
///
/// Defaults for `role` ("user") and `status` ("active") are filled in one
/// place only: `UserStore::create`.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

/// Partial update for a user; only supplied fields change.
///
/// `id`, `created_at` and `last_login` are not patchable.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}
