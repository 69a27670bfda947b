//! Job-search URL builder.
//!
//! Turns job-search preferences (title, job boards, locations, remote flag,
//! recency, region, exact match) into a single search-engine URL. The core is
//! [`query::QueryBuilder`]; the remaining modules provide the form rules,
//! static catalogs, configuration, and the CLI commands around it.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod form;
pub mod format;
pub mod open;
pub mod query;

pub use query::{QueryBuilder, SearchRequest, build_search_url};
