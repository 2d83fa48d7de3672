use crate::model::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::ValidationResult;

/// Raw HTML form submission. Numeric fields arrive as text so a value that
/// fails to parse becomes a field error and re-renders the form instead of
/// failing extraction.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product_id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub color: String,
}

impl ProductForm {
    /// Checks the field rules and either yields the entity the submission
    /// describes or the per-field errors. Nothing is persisted here.
    pub fn validate(&self) -> Result<Product, ValidationResult> {
        let mut errors = ValidationResult::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "The Name field is required.");
        } else if name.len() > 200 {
            errors.add("name", "Name must be at most 200 characters.");
        }

        let price = match self.price.trim().parse::<Decimal>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.add("price", "Price must be a valid decimal number.");
                None
            }
        };

        let stock = match self.stock.trim().parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.add("stock", "Stock must be a valid integer.");
                None
            }
        };

        if self.color.trim().len() > 50 {
            errors.add("color", "Color must be at most 50 characters.");
        }

        if !errors.is_valid() {
            return Err(errors);
        }

        Ok(Product {
            product_id: self.product_id,
            name: name.to_string(),
            price: price.unwrap_or_default(),
            stock: stock.unwrap_or_default(),
            color: self.color.trim().to_string(),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(value: &Product) -> Self {
        ProductForm {
            product_id: value.product_id,
            name: value.name.clone(),
            price: value.price.to_string(),
            stock: value.stock.to_string(),
            color: value.color.clone(),
        }
    }
}
