//! HTTP route handlers for the inventory server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Inventory page
//! GET  /health           - Health check
//!
//! # Inventory (HTMX fragments)
//! POST /products         - Add a product, returns the re-rendered list region
//! POST /products/price   - Normalize the price field, returns the input
//!
//! # API
//! GET  /graphql          - GraphiQL explorer
//! POST /graphql          - GraphQL endpoint
//! ```
//!
//! Anything else falls through to the static file service.

pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::graphql::{self, GRAPHQL_PATH};
use crate::state::AppState;

/// Create the product fragment routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/price", post(products::price))
}

/// Create all routes for the inventory server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::execute))
}
