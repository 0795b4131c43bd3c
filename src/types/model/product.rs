use chrono::{DateTime, Utc};

/// A stored product.
///
/// `price` is kept as a decimal string so no precision is lost between the
/// API boundary and storage. `updated_at` is refreshed by every update and
/// is never earlier than `created_at`.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: u32,
    pub sku: String,
    pub image: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
///
/// Defaults for `stock` (0) and `status` ("active") are filled in
/// `ProductStore::create`.
#[derive(Clone, Debug)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: Option<u32>,
    pub sku: String,
    pub image: Option<String>,
    pub status: Option<String>,
}

/// Partial update for a product; only supplied fields change.
#[derive(Clone, Debug, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<u32>,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
}
