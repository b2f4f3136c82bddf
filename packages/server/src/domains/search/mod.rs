//! Search domain - service and provider search, suggestions and category counts
//!
//! Read-only. Pipelines load candidates from the store, then filter by distance,
//! sort and paginate in memory.

pub mod actions;
pub mod data;
pub mod models;

pub use actions::{
    get_categories, get_search_suggestions, search_providers, search_services,
    ProviderSearchQuery, ServiceSearchQuery,
};
pub use models::{ProviderSort, ServiceSort};
