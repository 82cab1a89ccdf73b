//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::{InventorySchema, SchemaTransport, build_schema};
use crate::store::ProductStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The schema, the in-process
/// transport and the store all point at the same product list.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: ProductStore,
    schema: InventorySchema,
    transport: SchemaTransport,
}

impl AppState {
    /// Create a new application state with an empty store.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, ProductStore::new())
    }

    /// Create application state over an existing store.
    #[must_use]
    pub fn with_store(config: ServerConfig, store: ProductStore) -> Self {
        let schema = build_schema(store.clone());
        let transport = SchemaTransport::new(schema.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
                transport,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn store(&self) -> &ProductStore {
        &self.inner.store
    }

    /// Get a reference to the executable GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &InventorySchema {
        &self.inner.schema
    }

    /// Transport the page handlers drive the UI controller with.
    #[must_use]
    pub fn transport(&self) -> &SchemaTransport {
        &self.inner.transport
    }
}
