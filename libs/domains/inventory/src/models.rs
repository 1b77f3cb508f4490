use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - an inventory item stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name, unique across the collection
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Stock quantity
    pub quantity: i64,
    /// Unit of measure, e.g. "kg" or "pcs"
    #[serde(default)]
    pub unit: Option<String>,
}

/// DTO for creating or updating a product (urlencoded form body)
///
/// `price` and `quantity` are required for a product to exist; they are
/// optional here so an absent field surfaces as a validation error with
/// the standard `{"error": ...}` body instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
}

/// Validated writable field set, ready for persistence
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub quantity: i64,
    pub unit: Option<String>,
}

/// One row of the inventory value report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductTotals {
    pub name: String,
    pub quantity: i64,
    /// price × quantity
    #[serde(rename = "totalValue")]
    pub total_value: f64,
}

impl Product {
    /// Create a new product, assigning a fresh identifier.
    pub fn new(fields: ProductFields) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: fields.name,
            price: fields.price,
            description: fields.description,
            quantity: fields.quantity,
            unit: fields.unit,
        }
    }

    /// Replace the writable fields, keeping the identifier.
    pub fn apply_fields(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.quantity = fields.quantity;
        self.unit = fields.unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            price: 4.5,
            description: Some("crisp".to_string()),
            quantity: 12,
            unit: Some("kg".to_string()),
        }
    }

    #[test]
    fn test_new_carries_all_fields() {
        let product = Product::new(fields("Apples"));
        assert_eq!(product.name, "Apples");
        assert_eq!(product.price, 4.5);
        assert_eq!(product.description.as_deref(), Some("crisp"));
        assert_eq!(product.quantity, 12);
        assert_eq!(product.unit.as_deref(), Some("kg"));
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Product::new(fields("Apples"));
        let b = Product::new(fields("Pears"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_fields_keeps_id() {
        let mut product = Product::new(fields("Apples"));
        let id = product.id;

        product.apply_fields(ProductFields {
            name: "Pears".to_string(),
            price: 3.0,
            description: None,
            quantity: 7,
            unit: None,
        });

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Pears");
        assert_eq!(product.price, 3.0);
        assert_eq!(product.description, None);
        assert_eq!(product.quantity, 7);
        assert_eq!(product.unit, None);
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(fields("Apples"));
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_totals_serialize_camel_case_total_value() {
        let row = ProductTotals {
            name: "Apples".to_string(),
            quantity: 3,
            total_value: 15.0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "Apples", "quantity": 3, "totalValue": 15.0 })
        );
    }
}
