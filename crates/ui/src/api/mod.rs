//! Typed client for the inventory GraphQL API.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory_ui::api;
//! use inventory_ui::transport::HttpTransport;
//!
//! let transport = HttpTransport::new("http://127.0.0.1:3000/graphql".parse()?);
//! let products = api::list_products(&transport).await?;
//! ```

mod conversions;
pub mod queries;

use inventory_core::{Product, ProductId, ProductInput};
use tracing::instrument;

use crate::transport::{FetchError, Fetched, Transport, graphql_fetch};
use conversions::{convert_added_id, convert_product_input, convert_product_list};
use queries::{AddProduct, ProductList, add_product, product_list};

/// Fetch every product in insertion order.
///
/// # Errors
///
/// Returns `FetchError` if the request fails or the response is malformed.
#[instrument(skip(transport))]
pub async fn list_products<T>(transport: &T) -> Result<Fetched<Vec<Product>>, FetchError>
where
    T: Transport + ?Sized,
{
    graphql_fetch::<ProductList, _>(transport, product_list::Variables)
        .await?
        .try_map(convert_product_list)
}

/// Add one product and return the id the store assigned.
///
/// # Errors
///
/// Returns `FetchError` if the request fails or the response is malformed.
#[instrument(skip(transport, input))]
pub async fn add_product<T>(
    transport: &T,
    input: ProductInput,
) -> Result<Fetched<ProductId>, FetchError>
where
    T: Transport + ?Sized,
{
    let variables = add_product::Variables {
        product: convert_product_input(input),
    };

    graphql_fetch::<AddProduct, _>(transport, variables)
        .await?
        .try_map(convert_added_id)
}
