// Local Services Marketplace - search API core
//
// Customers search services and providers by text, category, price, rating and
// distance. The search pipelines only read; listings, reviews and portfolios are
// written by collaborating services.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
