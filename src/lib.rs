//! bookscope - regional book price explorer
//!
//! Pulls a genre's books from a live catalog, a text model, or a curated
//! fallback list, then prices them for a region and reports simple market
//! analytics.

pub mod acquire;
pub mod ai;
pub mod analytics;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod market;

pub use acquire::{Acquired, Acquisition, AcquisitionPlan};
pub use config::Config;
pub use market::{BookRecord, Region, Source};
