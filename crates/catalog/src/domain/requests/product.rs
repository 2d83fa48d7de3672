use crate::model::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[schema(example = "Pencil")]
    pub name: String,

    #[schema(example = "100.00")]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 50)]
    pub stock: i32,

    #[validate(length(max = 50, message = "Color must be at most 50 characters"))]
    #[schema(example = "Red")]
    pub color: String,
}

impl CreateProductRequest {
    /// The unsaved entity this request describes; the store assigns the key.
    pub fn to_product(&self) -> Product {
        Product {
            product_id: 0,
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            color: self.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = 1)]
    pub id: i32,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[schema(example = "Pencil")]
    pub name: String,

    #[schema(example = "100.00")]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 50)]
    pub stock: i32,

    #[validate(length(max = 50, message = "Color must be at most 50 characters"))]
    #[schema(example = "Red")]
    pub color: String,
}

impl UpdateProductRequest {
    pub fn to_product(&self) -> Product {
        Product {
            product_id: self.id,
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            color: self.color.clone(),
        }
    }
}
