//! Inventory UI components.
//!
//! Each component is a plain state holder with a pure render step backed by
//! an askama template. The server hosts them as an HTMX page; any other host
//! only needs a [`transport::Transport`] to run the controller's effects.
//!
//! # Modules
//!
//! - [`table`] - Product table with per-cell fallbacks
//! - [`form`] - Add-product form with the pinned currency symbol
//! - [`controller`] - List controller: owns the products, emits effects
//! - [`api`] - Typed `productList` / `addProduct` operations
//! - [`transport`] - GraphQL request helper and the HTTP transport

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod controller;
pub mod form;
pub mod table;
pub mod transport;

pub use controller::{Effect, Notice, ProductListController};
pub use form::{FormFields, PriceInput, ProductAddForm};
pub use table::{PRODUCT_TABLE_HEADINGS, render_product_table};
pub use transport::{FetchError, Fetched, HttpTransport, Transport};
