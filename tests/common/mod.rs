// Common test utilities for integration tests

use std::sync::Arc;

use pulseboard_backend::app_data::AppData;
use pulseboard_backend::stores::seed::seed_demo_data;
use pulseboard_backend::types::model::product::NewProduct;
use pulseboard_backend::types::model::user::NewUser;

/// Fresh, unseeded application state. Every test gets its own universe.
pub fn fresh_app_data() -> Arc<AppData> {
    AppData::new()
}

/// Application state carrying the fixed bootstrap dataset.
pub fn seeded_app_data() -> Arc<AppData> {
    let app_data = AppData::new();
    seed_demo_data(&app_data).expect("Failed to seed bootstrap dataset");
    app_data
}

pub fn sample_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "secret".to_string(),
        first_name: "Sample".to_string(),
        last_name: "User".to_string(),
        role: None,
        status: None,
        avatar: None,
        phone: None,
        bio: None,
    }
}

pub fn sample_product(sku: &str) -> NewProduct {
    NewProduct {
        name: "Sample Product".to_string(),
        description: None,
        price: "10.00".to_string(),
        stock: None,
        sku: sku.to_string(),
        image: None,
        status: None,
    }
}
