//! Product records and the add-product payload.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A stored product.
///
/// Only `id` is guaranteed; everything else is kept exactly as it was sent,
/// including absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned, 1-based, never reused.
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl Product {
    /// Build the stored record for `input` under the given id.
    #[must_use]
    pub fn from_input(id: ProductId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
            image_url: input.image_url,
        }
    }
}

/// Payload of the add-product mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_keeps_fields() {
        let input = ProductInput {
            name: Some("Shirt".to_string()),
            price: Some(9.99),
            category: Some("Shirts".to_string()),
            image_url: None,
        };
        let product = Product::from_input(ProductId::new(1), input);
        assert_eq!(product.id, ProductId::FIRST);
        assert_eq!(product.name.as_deref(), Some("Shirt"));
        assert_eq!(product.category.as_deref(), Some("Shirts"));
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let product = Product {
            id: ProductId::new(2),
            name: None,
            price: None,
            category: None,
            image_url: Some("https://example.com/a.png".to_string()),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.png");
        assert_eq!(json["id"], 2);
        assert!(json["price"].is_null());
    }

    #[test]
    fn test_input_accepts_missing_fields() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Belt"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Belt"));
        assert!(input.price.is_none());
        assert!(input.image_url.is_none());
    }
}
