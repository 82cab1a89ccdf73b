//! Product table component.
//!
//! Rendering is a pure function of the column headings and the products.
//! Headings are identified by position since they never change at runtime;
//! rows are identified by product id.

use askama::Template;
use inventory_core::{Product, format_price};

/// Column headings of the inventory table.
pub const PRODUCT_TABLE_HEADINGS: [&str; 4] = ["Product Name", "Price", "Category", "Image"];

/// Cell text for a value that was never provided.
pub const NO_DATA_AVAILABLE: &str = "No Data Available";

/// Text of the single row shown for an empty inventory.
pub const NO_PRODUCTS_MESSAGE: &str = "No Products added yet";

/// Header cell view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingView {
    pub index: usize,
    pub label: String,
}

/// Row view with every fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(NO_DATA_AVAILABLE)
                .to_string(),
            // Zero is a real price, only an absent one falls back.
            price: product
                .price
                .map_or_else(|| NO_DATA_AVAILABLE.to_string(), format_price),
            category: product.category.clone().unwrap_or_default(),
            image_url: product.image_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Product table template.
#[derive(Template)]
#[template(path = "product_table.html")]
pub struct ProductTableTemplate {
    pub headings: Vec<HeadingView>,
    pub rows: Vec<ProductRowView>,
    pub column_count: usize,
    pub no_data: &'static str,
    pub empty_message: &'static str,
}

impl ProductTableTemplate {
    /// Build the table for `headings` and `products`, in the given order.
    #[must_use]
    pub fn new<S: AsRef<str>>(headings: &[S], products: &[Product]) -> Self {
        Self {
            headings: headings
                .iter()
                .enumerate()
                .map(|(index, label)| HeadingView {
                    index,
                    label: label.as_ref().to_string(),
                })
                .collect(),
            rows: products.iter().map(ProductRowView::from).collect(),
            column_count: headings.len(),
            no_data: NO_DATA_AVAILABLE,
            empty_message: NO_PRODUCTS_MESSAGE,
        }
    }
}

/// Render the product table to HTML.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_product_table<S: AsRef<str>>(
    headings: &[S],
    products: &[Product],
) -> askama::Result<String> {
    ProductTableTemplate::new(headings, products).render()
}
