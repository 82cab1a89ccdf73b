//! Core types for the inventory.
//!
//! This module provides the product record and type-safe wrappers around it.

pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{CURRENCY_SYMBOL, format_price, parse_price, price_field_text, strip_currency_symbol};
pub use product::{Product, ProductInput};
