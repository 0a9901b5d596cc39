//! Tourist site recommendations over a bilingual (English/Arabic) catalog
//! grouped by governorate.
//!
//! The [`engine`] answers two queries against an immutable [`catalog::CatalogIndex`]:
//! sites sharing a region with places the caller already knows, and the sites
//! whose names are lexically closest to them. Results are rendered in the
//! caller's language by the projector.

pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
