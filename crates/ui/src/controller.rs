//! Root product list controller.
//!
//! The controller owns the authoritative product list and decides when to
//! talk to the API; rendering is a separate pure step. Network work is
//! expressed as [`Effect`]s so the state transitions can be exercised without
//! a server:
//!
//! ```text
//! mount()            -> Effect::LoadList
//! add_product(input) -> Effect::AddProduct(input)
//! on_list_loaded     -> replaces the whole list
//! on_product_added   -> Some(Effect::LoadList) when the mutation returned data
//! ```

use std::fmt;

use askama::Template;
use inventory_core::{Product, ProductId, ProductInput};
use tracing::{debug, warn};

use crate::api;
use crate::form::{FormFields, ProductAddForm};
use crate::table::{PRODUCT_TABLE_HEADINGS, render_product_table};
use crate::transport::{FetchError, Fetched, Transport};

/// Network work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full product list.
    LoadList,
    /// Send the add-product mutation.
    AddProduct(ProductInput),
}

/// A failure the page shows to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The server answered with application errors; holds the first message.
    QueryError(String),
    /// The request itself failed; holds the failure text.
    SendFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryError(message) => write!(f, "Error while querying for data - {message}"),
            Self::SendFailed(message) => write!(f, "Error in sending data to server: {message}"),
        }
    }
}

/// State of the inventory page.
#[derive(Debug, Clone, Default)]
pub struct ProductListController {
    products: Vec<Product>,
    notice: Option<Notice>,
}

impl ProductListController {
    /// An empty controller that has not fetched anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Products as last fetched.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The failure to show, if the last operation produced one.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Effect to run when the page is first shown.
    #[must_use]
    pub const fn mount(&self) -> Effect {
        Effect::LoadList
    }

    /// Effect to run when the form submits `input`.
    #[must_use]
    pub const fn add_product(&self, input: ProductInput) -> Effect {
        Effect::AddProduct(input)
    }

    /// Apply a list response. Data replaces the list wholesale.
    pub fn on_list_loaded(&mut self, result: Result<Fetched<Vec<Product>>, FetchError>) {
        if let Some(products) = self.accept(result) {
            debug!(count = products.len(), "Product list loaded");
            self.products = products;
        }
    }

    /// Apply a mutation response and return the follow-up effect.
    ///
    /// The new record is never spliced into the list; a successful add asks
    /// for a full refresh instead.
    pub fn on_product_added(
        &mut self,
        result: Result<Fetched<ProductId>, FetchError>,
    ) -> Option<Effect> {
        self.accept(result).map(|id| {
            debug!(%id, "Product added, refreshing list");
            Effect::LoadList
        })
    }

    /// Run `effect` and every follow-up effect it produces.
    pub async fn run<T>(&mut self, transport: &T, effect: Effect)
    where
        T: Transport + ?Sized,
    {
        self.notice = None;
        let mut next = Some(effect);
        while let Some(effect) = next {
            next = self.perform(transport, effect).await;
        }
    }

    async fn perform<T>(&mut self, transport: &T, effect: Effect) -> Option<Effect>
    where
        T: Transport + ?Sized,
    {
        match effect {
            Effect::LoadList => {
                let result = api::list_products(transport).await;
                self.on_list_loaded(result);
                None
            }
            Effect::AddProduct(input) => {
                let result = api::add_product(transport, input).await;
                self.on_product_added(result)
            }
        }
    }

    /// Turn a response into its payload, recording a notice on failure.
    fn accept<T>(&mut self, result: Result<Fetched<T>, FetchError>) -> Option<T> {
        match result {
            Ok(fetched) => {
                if let Some(error) = fetched.first_error() {
                    warn!(error = %error.message, "API returned errors");
                    self.notice = Some(Notice::QueryError(error.message.clone()));
                }
                fetched.data
            }
            Err(err) => {
                warn!(error = %err, "API request failed");
                self.notice = Some(Notice::SendFailed(err.to_string()));
                None
            }
        }
    }

    /// Build the page template, delegating to the table and form components.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering a component fails.
    pub fn template(
        &self,
        form: &ProductAddForm,
        fields: &FormFields,
    ) -> askama::Result<ProductListTemplate> {
        Ok(ProductListTemplate {
            notice: self.notice.as_ref().map(ToString::to_string),
            table: render_product_table(&PRODUCT_TABLE_HEADINGS, &self.products)?,
            form: form.render(fields)?,
        })
    }

    /// Render the page.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, form: &ProductAddForm, fields: &FormFields) -> askama::Result<String> {
        self.template(form, fields)?.render()
    }
}

/// Inventory page region: heading, notice, table and form.
#[derive(Template)]
#[template(path = "product_list.html")]
pub struct ProductListTemplate {
    pub notice: Option<String>,
    pub table: String,
    pub form: String,
}
