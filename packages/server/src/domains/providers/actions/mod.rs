//! Provider domain actions - business logic functions
//!
//! Actions are async functions called from HTTP handlers.
//! They do the work and return results directly.

mod queries;

pub use queries::*;
