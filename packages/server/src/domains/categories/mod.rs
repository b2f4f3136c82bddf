//! Categories domain - the service category catalog

pub mod models;

pub use models::{CategoryServiceRef, ServiceCategory};
