//! Print the product list.

use inventory_core::Product;
use inventory_ui::table::ProductRowView;
use inventory_ui::{HttpTransport, ProductListController};
use tracing::info;

/// Fetch every product and print one line per product.
///
/// Cells follow the table's placeholder rules.
///
/// # Errors
///
/// Returns the notice text if the server reported an error or could not be
/// reached.
#[allow(clippy::print_stdout)]
pub async fn run(transport: &HttpTransport) -> Result<(), Box<dyn std::error::Error>> {
    info!(endpoint = %transport.endpoint(), "Listing products");

    let mut controller = ProductListController::new();
    let effect = controller.mount();
    controller.run(transport, effect).await;

    for product in controller.products() {
        println!("{}", format_row(product));
    }

    match controller.notice() {
        Some(notice) => Err(notice.to_string().into()),
        None => Ok(()),
    }
}

/// One tab-separated line: id, name, price, category, image URL.
pub fn format_row(product: &Product) -> String {
    let row = ProductRowView::from(product);
    let image = row
        .image_url
        .unwrap_or_else(|| inventory_ui::table::NO_DATA_AVAILABLE.to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        row.id, row.name, row.price, row.category, image
    )
}

#[cfg(test)]
mod tests {
    use inventory_core::ProductId;

    use super::*;

    #[test]
    fn test_row_with_every_field() {
        let product = Product {
            id: ProductId::new(3),
            name: Some("Denim".to_string()),
            price: Some(12.5),
            category: Some("Jeans".to_string()),
            image_url: Some("https://example.com/d.png".to_string()),
        };
        assert_eq!(
            format_row(&product),
            "3\tDenim\t12.5\tJeans\thttps://example.com/d.png"
        );
    }

    #[test]
    fn test_row_placeholders() {
        let product = Product {
            id: ProductId::new(1),
            name: Some(String::new()),
            price: None,
            category: None,
            image_url: Some(String::new()),
        };
        assert_eq!(
            format_row(&product),
            "1\tNo Data Available\tNo Data Available\t\tNo Data Available"
        );
    }

    #[test]
    fn test_zero_price_is_printed() {
        let product = Product {
            id: ProductId::new(2),
            name: Some("Free".to_string()),
            price: Some(0.0),
            category: Some("Accessories".to_string()),
            image_url: None,
        };
        assert!(format_row(&product).starts_with("2\tFree\t0\t"));
    }
}
