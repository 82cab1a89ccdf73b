//! Add one product.

use inventory_core::Category;
use inventory_ui::controller::Notice;
use inventory_ui::{FormFields, HttpTransport, ProductAddForm, api};
use tracing::info;

/// Form fields as the command line supplied them.
pub fn fields(name: String, price: String, category: Category, image_url: String) -> FormFields {
    FormFields {
        name,
        price,
        category: category.to_string(),
        image_url,
    }
}

/// Submit `fields` the way the web form does and print the assigned id.
///
/// # Errors
///
/// Returns the notice text if the server reported an error or could not be
/// reached.
#[allow(clippy::print_stdout)]
pub async fn run(
    transport: &HttpTransport,
    mut fields: FormFields,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = ProductAddForm::new().submit(&mut fields);
    info!(endpoint = %transport.endpoint(), name = ?input.name, "Adding product");

    let fetched = api::add_product(transport, input)
        .await
        .map_err(|e| Notice::SendFailed(e.to_string()).to_string())?;

    if let Some(error) = fetched.first_error() {
        return Err(Notice::QueryError(error.message.clone()).to_string().into());
    }

    match fetched.data {
        Some(id) => {
            println!("Added product {id}");
            Ok(())
        }
        None => Err("Server returned no product id".into()),
    }
}
