//! Schema types and resolvers.

use async_graphql::{EmptySubscription, InputObject, Object, Schema};
use inventory_core::{Product, ProductInput};

use crate::store::ProductStore;

/// The executable inventory schema.
pub type InventorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`.
#[must_use]
pub fn build_schema(store: ProductStore) -> InventorySchema {
    Schema::build(
        QueryRoot {
            store: store.clone(),
        },
        MutationRoot { store },
        EmptySubscription,
    )
    .finish()
}

/// GraphQL view of a stored product.
pub struct ProductNode(pub Product);

#[Object(name = "Product")]
impl ProductNode {
    async fn id(&self) -> i32 {
        self.0.id.as_i32()
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn category(&self) -> Option<&str> {
        self.0.category.as_deref()
    }

    async fn price(&self) -> Option<f64> {
        self.0.price
    }

    async fn image_url(&self) -> Option<&str> {
        self.0.image_url.as_deref()
    }
}

/// Payload of `addProduct`. Every field is optional and stored as sent.
#[derive(Debug, InputObject)]
#[graphql(name = "ProductInputs")]
pub struct ProductInputs {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl From<ProductInputs> for ProductInput {
    fn from(inputs: ProductInputs) -> Self {
        Self {
            name: inputs.name,
            price: inputs.price,
            category: inputs.category,
            image_url: inputs.image_url,
        }
    }
}

pub struct QueryRoot {
    store: ProductStore,
}

#[Object(name = "Query")]
impl QueryRoot {
    /// Every product in insertion order.
    async fn product_list(&self) -> Vec<ProductNode> {
        self.store.list().await.into_iter().map(ProductNode).collect()
    }
}

pub struct MutationRoot {
    store: ProductStore,
}

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Append a product under the next id and return it.
    async fn add_product(&self, product: ProductInputs) -> async_graphql::Result<ProductNode> {
        let stored = self.store.add(product.into()).await?;
        Ok(ProductNode(stored))
    }
}
