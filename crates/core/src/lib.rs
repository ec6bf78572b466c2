//! Harvest & Hearth Core - Shared domain types.
//!
//! This crate provides the types used across all Harvest & Hearth components:
//! - `client` - Persisted order list, favorites, catalog filtering, view state
//! - `cli` - Command-line front end over the client crate
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, catalog records, order lines, preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
