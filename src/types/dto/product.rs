use chrono::{DateTime, Utc};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::model::product::{NewProduct, Product, ProductPatch};

/// Product record as it leaves the API boundary
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Decimal price as a string, e.g. "199.99"
    pub price: String,
    pub stock: u32,
    pub sku: String,
    pub image: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            sku: product.sku,
            image: product.image,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Request model for creating a product
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[oai(validator(min_length = 1))]
    pub name: String,

    pub description: Option<String>,

    /// Decimal price as a string, e.g. "199.99"
    #[oai(validator(pattern = r"^\d+(\.\d+)?$"))]
    pub price: String,

    /// Units in stock; defaults to 0
    pub stock: Option<u32>,

    /// Stock keeping unit, unique across products
    #[oai(validator(min_length = 1))]
    pub sku: String,

    pub image: Option<String>,

    /// Product status; defaults to "active"
    pub status: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            sku: request.sku,
            image: request.image,
            status: request.status,
        }
    }
}

/// Request model for partially updating a product.
///
/// Absent fields are left untouched; present fields obey the same
/// constraints as on create.
#[derive(Object, Debug, Serialize, Deserialize, Default)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[oai(validator(min_length = 1))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[oai(validator(pattern = r"^\d+(\.\d+)?$"))]
    pub price: Option<String>,

    pub stock: Option<u32>,

    #[oai(validator(min_length = 1))]
    pub sku: Option<String>,

    pub image: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            sku: request.sku,
            image: request.image,
            status: request.status,
        }
    }
}

/// Response for product creation
#[derive(ApiResponse)]
pub enum CreateProductApiResponse {
    /// Product created
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
}

/// Response for product deletion
#[derive(ApiResponse)]
pub enum DeleteProductApiResponse {
    /// Product removed, no body
    #[oai(status = 204)]
    Deleted,
}
