//! Product Models
//!
//! Wire shapes documented in the OpenAPI schema. Keys are camelCase and prices are JSON
//! numbers, matching how `catalog` serializes its records.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog::products::{NewProduct, ProductPatch, ProductRecord};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Image location, omitted when the product has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image_url: product.image_url,
        }
    }
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Optional image location
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image_url: request.image_url,
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product identifier
    pub id: Uuid,
}

/// Update Product Request
///
/// Merge-patch: absent fields are left unchanged, an empty `imageUrl` clears the image.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    /// Replacement name
    #[serde(default)]
    pub name: Option<String>,

    /// Replacement description
    #[serde(default)]
    pub description: Option<String>,

    /// Replacement price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Replacement category
    #[serde(default)]
    pub category: Option<String>,

    /// Replacement image location
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image_url: request.image_url,
        }
    }
}
