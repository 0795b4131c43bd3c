use std::collections::HashMap;
use std::sync::RwLock;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use uuid::Uuid;

use crate::stores::StoreError;
use crate::types::model::user::{NewUser, User, UserPatch};

/// UserStore owns the in-memory user collection and enforces email
/// uniqueness at insert time.
///
/// Created once in `AppData` and shared via `Arc`; a fresh instance gives
/// tests a fully isolated collection. Lock poisoning is a programming
/// error, so lock acquisition unwraps.
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a user by id. Absence is a valid outcome, not an error.
    pub fn get(&self, id: &str) -> Option<User> {
        self.users.read().unwrap().get(id).cloned()
    }

    /// Look up a user by exact email match. Comparison is case-sensitive.
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Insert a new user, hashing its password and filling defaults.
    ///
    /// The uniqueness check and the insert run under a single write lock,
    /// so two racing creates with the same email yield exactly one success
    /// and one `DuplicateKey`.
    pub fn create(&self, input: NewUser) -> Result<User, StoreError> {
        let password_hash = hash_password(&input.password)?;

        let mut users = self.users.write().unwrap();
        if users.values().any(|user| user.email == input.email) {
            return Err(StoreError::DuplicateKey {
                field: "email",
                value: input.email,
            });
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            role: input.role.unwrap_or_else(|| "user".to_string()),
            status: input.status.unwrap_or_else(|| "active".to_string()),
            avatar: input.avatar,
            phone: input.phone,
            bio: input.bio,
            last_login: None,
            created_at: Utc::now(),
        };

        users.insert(user.id.clone(), user.clone());
        tracing::debug!(user_id = %user.id, "user inserted");
        Ok(user)
    }

    /// Shallow-merge the supplied fields onto an existing user.
    ///
    /// `id` and `created_at` are never touched. A patched password is
    /// re-hashed before it is stored. Returns `Ok(None)` when the id is
    /// unknown.
    pub fn update(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        // Hash before taking the lock; hashing is the slow part.
        let password_hash = match &patch.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let mut users = self.users.write().unwrap();
        let Some(user) = users.get_mut(id) else {
            return Ok(None);
        };

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        if let Some(first_name) = patch.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(status) = patch.status {
            user.status = status;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }

        Ok(Some(user.clone()))
    }

    /// Remove a user. Returns whether anything was removed; deleting an
    /// unknown id is not an error.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.users.write().unwrap().remove(id).is_some();
        if removed {
            tracing::debug!(user_id = %id, "user removed");
        }
        removed
    }

    /// Snapshot of the collection. Ordering is only stable within a
    /// process run; callers must not rely on it.
    pub fn list(&self) -> Vec<User> {
        self.users.read().unwrap().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    /// Check a login attempt against the stored hash.
    ///
    /// Unknown email and wrong password both come back as `None` so the
    /// caller cannot tell which part failed.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<User> {
        let user = self.get_by_email(email)?;
        let parsed_hash = PasswordHash::new(&user.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .ok()?;
        Some(user)
    }

    /// Stamp a successful login on the user record and return the
    /// refreshed user.
    pub fn record_login(&self, id: &str) -> Option<User> {
        let mut users = self.users.write().unwrap();
        let user = users.get_mut(id)?;
        user.last_login = Some(Utc::now());
        Some(user.clone())
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: None,
            status: None,
            avatar: None,
            phone: None,
            bio: None,
        }
    }

    #[test]
    fn create_fills_defaults_and_generates_identity() {
        let store = UserStore::new();

        let user = store.create(new_user("ada@example.com")).unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.role, "user");
        assert_eq!(user.status, "active");
        assert!(user.last_login.is_none());
        assert_eq!(store.get(&user.id), Some(user));
    }

    #[test]
    fn create_hashes_the_password() {
        let store = UserStore::new();

        let user = store.create(new_user("ada@example.com")).unwrap();

        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "secret");
    }

    #[test]
    fn create_rejects_duplicate_email() {
        let store = UserStore::new();
        store.create(new_user("ada@example.com")).unwrap();

        let result = store.create(new_user("ada@example.com"));

        match result {
            Err(StoreError::DuplicateKey { field, .. }) => assert_eq!(field, "email"),
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let store = UserStore::new();
        store.create(new_user("Ada@example.com")).unwrap();

        assert!(store.get_by_email("ada@example.com").is_none());
        assert!(store.get_by_email("Ada@example.com").is_some());
    }

    #[test]
    fn absent_ids_are_not_errors() {
        let store = UserStore::new();

        assert!(store.get("missing").is_none());
        assert!(store
            .update("missing", UserPatch::default())
            .unwrap()
            .is_none());
        assert!(!store.delete("missing"));
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();

        let patch = UserPatch {
            first_name: Some("Augusta".to_string()),
            ..UserPatch::default()
        };
        let updated = store.update(&user.id, patch).unwrap().unwrap();

        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn update_rehashes_a_patched_password() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();

        let patch = UserPatch {
            password: Some("rotated".to_string()),
            ..UserPatch::default()
        };
        store.update(&user.id, patch).unwrap().unwrap();

        assert!(store
            .verify_credentials("ada@example.com", "rotated")
            .is_some());
        assert!(store
            .verify_credentials("ada@example.com", "secret")
            .is_none());
    }

    #[test]
    fn delete_then_get_is_absent_and_second_delete_is_false() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();

        assert!(store.delete(&user.id));
        assert!(store.get(&user.id).is_none());
        assert!(!store.delete(&user.id));
    }

    #[test]
    fn list_reflects_creates_minus_deletes() {
        let store = UserStore::new();
        let ids: Vec<String> = (0..4)
            .map(|i| {
                store
                    .create(new_user(&format!("user{}@example.com", i)))
                    .unwrap()
                    .id
            })
            .collect();

        assert!(store.delete(&ids[0]));
        assert!(store.delete(&ids[3]));

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        let mut listed_ids: Vec<&str> = listed.iter().map(|u| u.id.as_str()).collect();
        listed_ids.sort_unstable();
        listed_ids.dedup();
        assert_eq!(listed_ids.len(), 2);
    }

    #[test]
    fn credential_failures_are_uniform() {
        let store = UserStore::new();
        store.create(new_user("ada@example.com")).unwrap();

        assert!(store
            .verify_credentials("ada@example.com", "wrong")
            .is_none());
        assert!(store
            .verify_credentials("nobody@example.com", "secret")
            .is_none());
    }

    #[test]
    fn record_login_persists_the_timestamp() {
        let store = UserStore::new();
        let user = store.create(new_user("ada@example.com")).unwrap();
        assert!(user.last_login.is_none());

        let refreshed = store.record_login(&user.id).unwrap();

        assert!(refreshed.last_login.is_some());
        assert_eq!(
            store.get(&user.id).unwrap().last_login,
            refreshed.last_login
        );
    }
}
