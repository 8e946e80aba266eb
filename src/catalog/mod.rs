//! Book catalog site: HTTP client, category genres, and page parsing.

pub mod client;
pub mod genres;
pub mod parser;
pub mod selectors;

pub use client::{CatalogClient, CatalogFetch};
pub use parser::Parser;
