//! Conversions from generated GraphQL types to domain types.

use inventory_core::{Product, ProductId, ProductInput};

use super::queries::{add_product, product_list};
use crate::transport::FetchError;

/// GraphQL `Int` arrives as `i64`; ids are `i32` on both ends.
fn convert_id(id: i64) -> Result<ProductId, FetchError> {
    i32::try_from(id)
        .map(ProductId::new)
        .map_err(|_| FetchError::InvalidResponse(format!("product id out of range: {id}")))
}

pub fn convert_product(node: product_list::ProductListProductList) -> Result<Product, FetchError> {
    Ok(Product {
        id: convert_id(node.id)?,
        name: node.name,
        price: node.price,
        category: node.category,
        image_url: node.image_url,
    })
}

pub fn convert_product_list(data: product_list::ResponseData) -> Result<Vec<Product>, FetchError> {
    data.product_list.into_iter().map(convert_product).collect()
}

pub fn convert_added_id(data: add_product::ResponseData) -> Result<ProductId, FetchError> {
    convert_id(data.add_product.id)
}

pub fn convert_product_input(input: ProductInput) -> add_product::ProductInputs {
    add_product::ProductInputs {
        name: input.name,
        price: input.price,
        category: input.category,
        image_url: input.image_url,
    }
}
