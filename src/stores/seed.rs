use crate::app_data::AppData;
use crate::stores::StoreError;
use crate::types::model::product::NewProduct;
use crate::types::model::user::NewUser;

/// Seed the fixed bootstrap dataset: one admin user, two sample users and
/// four sample products.
///
/// Runs once at process start. Data lives only for the process lifetime;
/// a restart discards everything and reseeds the same dataset. All seeded
/// accounts use the password "password", hashed on insert.
pub fn seed_demo_data(app_data: &AppData) -> Result<(), StoreError> {
    let users = [
        NewUser {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
            first_name: "John".to_string(),
            last_name: "Anderson".to_string(),
            role: Some("admin".to_string()),
            status: None,
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150"
                    .to_string(),
            ),
            phone: Some("+1 (555) 123-4567".to_string()),
            bio: Some(
                "System administrator with 8+ years of experience managing enterprise applications and infrastructure."
                    .to_string(),
            ),
        },
        NewUser {
            email: "emma@example.com".to_string(),
            password: "password".to_string(),
            first_name: "Emma".to_string(),
            last_name: "Watson".to_string(),
            role: Some("admin".to_string()),
            status: None,
            avatar: None,
            phone: Some("+1 (555) 123-4567".to_string()),
            bio: None,
        },
        NewUser {
            email: "james@example.com".to_string(),
            password: "password".to_string(),
            first_name: "James".to_string(),
            last_name: "Wilson".to_string(),
            role: Some("manager".to_string()),
            status: None,
            avatar: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150"
                    .to_string(),
            ),
            phone: Some("+1 (555) 123-4567".to_string()),
            bio: None,
        },
    ];

    for user in users {
        app_data.user_store.create(user)?;
    }

    let products = [
        (
            "Wireless Headphones",
            "Premium quality wireless headphones with noise cancellation",
            "199.99",
            47,
            "WH001",
            "active",
        ),
        (
            "Smartphone Pro",
            "Latest generation smartphone with advanced features",
            "899.99",
            3,
            "SP001",
            "active",
        ),
        (
            "Laptop Pro",
            "High-performance laptop for professionals and creators",
            "1299.99",
            23,
            "LP001",
            "active",
        ),
        (
            "Smart Watch",
            "Advanced smartwatch with health monitoring features",
            "349.99",
            0,
            "SW001",
            "inactive",
        ),
    ];

    for (name, description, price, stock, sku, status) in products {
        app_data.product_store.create(NewProduct {
            name: name.to_string(),
            description: Some(description.to_string()),
            price: price.to_string(),
            stock: Some(stock),
            sku: sku.to_string(),
            image: None,
            status: Some(status.to_string()),
        })?;
    }

    Ok(())
}
