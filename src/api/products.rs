use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ProductError;
use crate::stores::{ProductStore, StoreError};
use crate::types::dto::product::{
    CreateProductApiResponse, CreateProductRequest, DeleteProductApiResponse,
    ProductResponse, UpdateProductRequest,
};

/// Product management API endpoints
pub struct ProductsApi {
    product_store: Arc<ProductStore>,
}

impl ProductsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            product_store: app_data.product_store.clone(),
        }
    }
}

/// API tags for product endpoints
#[derive(Tags)]
enum ApiTags {
    /// Product management endpoints
    Products,
}

#[OpenApi(prefix_path = "/products")]
impl ProductsApi {
    /// List all products
    #[oai(path = "/", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> Json<Vec<ProductResponse>> {
        Json(
            self.product_store
                .list()
                .into_iter()
                .map(ProductResponse::from)
                .collect(),
        )
    }

    /// Fetch a single product by id
    #[oai(path = "/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, id: Path<String>) -> Result<Json<ProductResponse>, ProductError> {
        self.product_store
            .get(&id.0)
            .map(|product| Json(product.into()))
            .ok_or_else(ProductError::not_found)
    }

    /// Create a product
    ///
    /// Fails with a conflict when the SKU is already taken.
    #[oai(path = "/", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        body: Json<CreateProductRequest>,
    ) -> Result<CreateProductApiResponse, ProductError> {
        match self.product_store.create(body.0.into()) {
            Ok(product) => {
                tracing::info!(product_id = %product.id, sku = %product.sku, "product created");
                Ok(CreateProductApiResponse::Created(Json(product.into())))
            }
            Err(StoreError::DuplicateKey { .. }) => Err(ProductError::sku_exists()),
            Err(err) => {
                tracing::error!(error = %err, "product creation failed");
                Err(ProductError::internal_error())
            }
        }
    }

    /// Partially update a product
    ///
    /// Only the supplied fields change; `updatedAt` is refreshed on every
    /// call, `id` and `createdAt` never change.
    #[oai(path = "/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> Result<Json<ProductResponse>, ProductError> {
        self.product_store
            .update(&id.0, body.0.into())
            .map(|product| Json(product.into()))
            .ok_or_else(ProductError::not_found)
    }

    /// Delete a product
    #[oai(path = "/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        id: Path<String>,
    ) -> Result<DeleteProductApiResponse, ProductError> {
        if self.product_store.delete(&id.0) {
            tracing::info!(product_id = %id.0, "product deleted");
            Ok(DeleteProductApiResponse::Deleted)
        } else {
            Err(ProductError::not_found())
        }
    }
}
