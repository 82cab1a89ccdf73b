//! In-process transport that executes the schema directly.
//!
//! The page handlers drive the UI controller through this transport, so the
//! HTML page and remote clients speak the exact same JSON contract.

use inventory_ui::transport::{FetchError, Transport};
use serde_json::Value;
use tracing::instrument;

use super::InventorySchema;

/// Transport that hands request bodies straight to the schema.
#[derive(Clone)]
pub struct SchemaTransport {
    schema: InventorySchema,
}

impl SchemaTransport {
    /// Create a transport over `schema`.
    #[must_use]
    pub const fn new(schema: InventorySchema) -> Self {
        Self { schema }
    }
}

impl Transport for SchemaTransport {
    #[instrument(skip(self, body))]
    async fn send(&self, body: Value) -> Result<String, FetchError> {
        let request: async_graphql::Request = serde_json::from_value(body)?;
        let response = self.schema.execute(request).await;
        Ok(serde_json::to_string(&response)?)
    }
}
