use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::stores::StoreError;
use crate::types::model::product::{NewProduct, Product, ProductPatch};

/// ProductStore owns the in-memory product collection and enforces SKU
/// uniqueness at insert time.
pub struct ProductStore {
    products: RwLock<HashMap<String, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a product by id. Absence is a valid outcome, not an error.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }

    /// Look up a product by exact SKU match. Comparison is case-sensitive.
    pub fn get_by_sku(&self, sku: &str) -> Option<Product> {
        self.products
            .read()
            .unwrap()
            .values()
            .find(|product| product.sku == sku)
            .cloned()
    }

    /// Insert a new product, filling defaults and stamping timestamps.
    ///
    /// The SKU uniqueness check and the insert run under a single write
    /// lock, so two racing creates with the same SKU yield exactly one
    /// success and one `DuplicateKey`.
    pub fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let mut products = self.products.write().unwrap();
        if products.values().any(|product| product.sku == input.sku) {
            return Err(StoreError::DuplicateKey {
                field: "sku",
                value: input.sku,
            });
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock.unwrap_or(0),
            sku: input.sku,
            image: input.image,
            status: input.status.unwrap_or_else(|| "active".to_string()),
            created_at: now,
            updated_at: now,
        };

        products.insert(product.id.clone(), product.clone());
        tracing::debug!(product_id = %product.id, sku = %product.sku, "product inserted");
        Ok(product)
    }

    /// Shallow-merge the supplied fields onto an existing product.
    ///
    /// `id` and `created_at` are never touched. `updated_at` is refreshed
    /// on every call, including an empty patch. Returns `None` when the id
    /// is unknown.
    pub fn update(&self, id: &str, patch: ProductPatch) -> Option<Product> {
        let mut products = self.products.write().unwrap();
        let product = products.get_mut(id)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(sku) = patch.sku {
            product.sku = sku;
        }
        if let Some(image) = patch.image {
            product.image = Some(image);
        }
        if let Some(status) = patch.status {
            product.status = status;
        }
        product.updated_at = Utc::now();

        Some(product.clone())
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.products.write().unwrap().remove(id).is_some();
        if removed {
            tracing::debug!(product_id = %id, "product removed");
        }
        removed
    }

    /// Snapshot of the collection. Ordering is only stable within a
    /// process run; callers must not rely on it.
    pub fn list(&self) -> Vec<Product> {
        self.products.read().unwrap().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.products.read().unwrap().len()
    }
}
