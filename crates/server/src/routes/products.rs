//! Add-product route handlers.
//!
//! Both handlers answer HTMX requests with HTML fragments. The add handler
//! returns the whole list region so the table, the reset form and any notice
//! are swapped in together.

use askama::Template;
use axum::{Extension, Form, extract::State, response::Html};
use inventory_ui::{FormFields, PriceInput, ProductAddForm, ProductListController};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Submit the add-product form.
///
/// The current list is loaded first so a failed add still shows it. A
/// successful add is followed by a full list refresh.
#[instrument(skip(state, fields), fields(request_id = %request_id.as_str()))]
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(mut fields): Form<FormFields>,
) -> Result<Html<String>> {
    let mut form = ProductAddForm::new();
    let input = form.submit(&mut fields);

    add_breadcrumb(
        "inventory",
        "Submitted add-product form",
        Some(&[
            ("category", input.category.as_deref().unwrap_or_default()),
            ("request_id", request_id.as_str()),
        ]),
    );

    let mut controller = ProductListController::new();
    let mount = controller.mount();
    controller.run(state.transport(), mount).await;

    let add = controller.add_product(input);
    controller.run(state.transport(), add).await;

    Ok(Html(controller.render(&form, &fields)?))
}

/// Normalize one keystroke in the price field.
///
/// Returns the price input with the currency symbol moved back to the front.
pub async fn price(Form(input): Form<PriceInput>) -> Result<Html<String>> {
    let mut form = ProductAddForm::new();
    form.on_price_input(&input.price);
    Ok(Html(form.price_template().render()?))
}
