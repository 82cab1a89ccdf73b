//! GraphQL API over the product store.
//!
//! # Schema
//!
//! ```graphql
//! type Product { id: Int!, name: String, category: String, price: Float, imageUrl: String }
//! input ProductInputs { name: String, price: Float, category: String, imageUrl: String }
//! type Query { productList: [Product!]! }
//! type Mutation { addProduct(product: ProductInputs!): Product! }
//! ```
//!
//! The schema is executed with `async-graphql`. It is mounted by hand on a
//! plain axum route: the body is `{query, variables}` JSON and the answer is
//! `{data?, errors?}` JSON.

mod schema;
mod transport;

pub use schema::{InventorySchema, MutationRoot, ProductInputs, ProductNode, QueryRoot, build_schema};
pub use transport::SchemaTransport;

use async_graphql::http::GraphiQLSource;
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute one GraphQL request.
///
/// Bodies that are not JSON of the expected shape are rejected with 400.
/// Everything else gets a GraphQL response, errors included.
pub async fn execute(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: std::result::Result<Json<async_graphql::Request>, JsonRejection>,
) -> Result<Json<async_graphql::Response>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    debug!(
        request_id = %request_id.as_str(),
        operation = ?request.operation_name,
        "Executing GraphQL request"
    );
    let response = state.schema().execute(request).await;
    if response.is_err() {
        debug!(
            request_id = %request_id.as_str(),
            errors = ?response.errors,
            "GraphQL request returned errors"
        );
    }

    Ok(Json(response))
}

/// GraphiQL explorer pointed at the endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
