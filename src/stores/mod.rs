// Stores layer - in-memory repositories
pub mod product_store;
pub mod seed;
pub mod user_store;

pub use product_store::ProductStore;
pub use user_store::UserStore;

use thiserror::Error;

/// Failures a store can produce.
///
/// Absence ("not found") is never an error; it is represented as
/// `Option`/`bool` results so callers can branch on presence. The only
/// error outcomes are a unique-key collision at insert time and a password
/// hashing failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection's unique key is already taken.
    #[error("{field} already in use: {value}")]
    DuplicateKey { field: &'static str, value: String },

    /// Password hashing failed.
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}
