//! Add-product form component.
//!
//! Only the price text is component state. Name, category and image URL are
//! read from the live form fields when the form is submitted, and written back
//! to their initial values right after.

use askama::Template;
use inventory_core::{CURRENCY_SYMBOL, Category, ProductInput, parse_price, price_field_text};
use serde::{Deserialize, Serialize};

/// Path the form posts to.
pub const ADD_PRODUCT_PATH: &str = "/products";

/// Path each price keystroke posts to.
pub const PRICE_INPUT_PATH: &str = "/products/price";

/// Current values of the form's input elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub name: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
}

/// Keystroke payload of the price input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceInput {
    pub price: String,
}

/// State of the add-product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAddForm {
    price: String,
}

impl Default for ProductAddForm {
    fn default() -> Self {
        Self {
            price: CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl ProductAddForm {
    /// A form with the bare currency symbol in the price field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text the price field currently displays.
    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    /// Handle one keystroke in the price field.
    pub fn on_price_input(&mut self, raw: &str) {
        self.price = price_field_text(raw);
    }

    /// Submit the form.
    ///
    /// Builds the record from `fields`, then resets name and image URL to
    /// empty, category to the first option and the price to the bare symbol.
    /// The reset does not wait for the server; the caller passes the returned
    /// record on to whoever adds products.
    pub fn submit(&mut self, fields: &mut FormFields) -> ProductInput {
        let input = ProductInput {
            name: Some(fields.name.clone()),
            price: parse_price(&fields.price),
            category: Some(fields.category.clone()),
            image_url: Some(fields.image_url.clone()),
        };

        *self = Self::default();
        fields.name.clear();
        fields.image_url.clear();
        fields.category = Category::default().to_string();
        fields.price = self.price.clone();

        input
    }

    /// Build the form template for `fields`.
    #[must_use]
    pub fn template(&self, fields: &FormFields) -> ProductAddTemplate {
        let selected = fields.category.parse::<Category>().unwrap_or_default();
        ProductAddTemplate {
            action: ADD_PRODUCT_PATH,
            categories: Category::ALL
                .into_iter()
                .map(|category| CategoryOption {
                    value: category.as_str(),
                    selected: category == selected,
                })
                .collect(),
            price_action: PRICE_INPUT_PATH,
            price: self.price.clone(),
            name: fields.name.clone(),
            image_url: fields.image_url.clone(),
        }
    }

    /// Build the price input fragment.
    #[must_use]
    pub fn price_template(&self) -> PriceInputTemplate {
        PriceInputTemplate {
            price_action: PRICE_INPUT_PATH,
            price: self.price.clone(),
        }
    }

    /// Render the whole form with `fields` as the input values.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, fields: &FormFields) -> askama::Result<String> {
        self.template(fields).render()
    }
}

/// One `<option>` of the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Price input fragment, swapped in after every keystroke.
#[derive(Template)]
#[template(path = "price_input.html")]
pub struct PriceInputTemplate {
    pub price_action: &'static str,
    pub price: String,
}

/// Add-product form template.
#[derive(Template)]
#[template(path = "product_add.html")]
pub struct ProductAddTemplate {
    pub action: &'static str,
    pub categories: Vec<CategoryOption>,
    pub price_action: &'static str,
    pub price: String,
    pub name: String,
    pub image_url: String,
}
