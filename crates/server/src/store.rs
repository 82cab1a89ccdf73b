//! In-memory product store.
//!
//! One ordered `Vec<Product>` behind a `RwLock`. Adds take the write lock for
//! the whole "compute next id, append" step, so concurrent adds always get
//! distinct, gap-free ids. Nothing is ever removed or edited.

use std::sync::Arc;

use inventory_core::{Product, ProductId, ProductInput};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Errors returned by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every `i32` id has been handed out.
    #[error("Product id space exhausted after {0} products")]
    IdSpaceExhausted(usize),
}

/// Shared handle to the product list. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether nothing has been added yet.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Append `input` under the next id and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdSpaceExhausted` once no further id fits in `i32`.
    #[instrument(skip(self, input))]
    pub async fn add(&self, input: ProductInput) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;

        let id = ProductId::after_count(products.len())
            .ok_or(StoreError::IdSpaceExhausted(products.len()))?;
        let product = Product::from_input(id, input);
        products.push(product.clone());

        info!(%id, name = ?product.name, "Product added");
        Ok(product)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn named(name: &str) -> ProductInput {
        ProductInput {
            name: Some(name.to_string()),
            ..ProductInput::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = ProductStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = ProductStore::new();
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(store.add(named(name)).await.unwrap().id.as_i32());
        }
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ProductStore::new();
        store.add(named("first")).await.unwrap();
        store.add(named("second")).await.unwrap();
        store.add(named("third")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .into_iter()
            .map(|p| p.name.unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_add_stores_missing_fields_as_is() {
        let store = ProductStore::new();
        let product = store.add(ProductInput::default()).await.unwrap();

        assert_eq!(product.id, ProductId::FIRST);
        assert!(product.name.is_none());
        assert!(product.price.is_none());
        assert_eq!(store.list().await, vec![product]);
    }

    #[tokio::test]
    async fn test_clones_share_the_list() {
        let store = ProductStore::new();
        let other = store.clone();
        other.add(named("shared")).await.unwrap();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_get_distinct_gap_free_ids() {
        let store = ProductStore::new();
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add(named(&format!("p{i}"))).await.unwrap().id })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().as_i32());
        }

        assert_eq!(ids, (1..=64).collect::<HashSet<_>>());

        // Stored order matches id order
        let listed: Vec<_> = store.list().await.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(listed, (1..=64).collect::<Vec<_>>());
    }
}
