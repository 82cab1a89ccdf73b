//! Inventory page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use inventory_ui::{FormFields, ProductAddForm, ProductListController};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Full page shell around the list region.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Rendered list region (heading, notice, table, form).
    pub content: String,
}

/// Display the inventory page.
///
/// Mounts a fresh controller, which loads the product list, and renders it
/// with an empty form.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<IndexTemplate> {
    let mut controller = ProductListController::new();
    let effect = controller.mount();
    controller.run(state.transport(), effect).await;

    let content = controller.render(&ProductAddForm::new(), &FormFields::default())?;
    Ok(IndexTemplate { content })
}
