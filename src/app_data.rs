use std::sync::Arc;

use crate::stores::{ProductStore, UserStore};

/// Centralized application state following the main-owned stores pattern.
///
/// Both stores are created exactly once here and handed to the API layer
/// via `Arc`, never reached through global state. A fresh `AppData` gives
/// a test a fully isolated universe.
pub struct AppData {
    pub user_store: Arc<UserStore>,
    pub product_store: Arc<ProductStore>,
}

impl AppData {
    /// Create empty stores. Seeding the bootstrap dataset is a separate,
    /// explicit step (`stores::seed::seed_demo_data`).
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            user_store: Arc::new(UserStore::new()),
            product_store: Arc::new(ProductStore::new()),
        })
    }
}
