//! Inventory Core - Shared types library.
//!
//! This crate provides the domain types used across all inventory components:
//! - `server` - GraphQL API and the HTML inventory page
//! - `ui` - Product table, add-product form and list controller
//! - `cli` - Command-line client for listing and adding products
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no locking. This keeps it lightweight and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, the category set, type-safe IDs and price text

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
