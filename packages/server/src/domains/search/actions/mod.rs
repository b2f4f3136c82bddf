mod categories;
mod search_providers;
mod search_services;
mod suggestions;

pub use categories::*;
pub use search_providers::*;
pub use search_services::*;
pub use suggestions::*;
