pub mod service_category;

pub use service_category::*;
