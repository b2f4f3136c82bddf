//! Services domain - priced offerings listed by providers

pub mod models;

pub use models::{PriceType, Service};
