pub mod categories;
pub mod providers;
pub mod services;
pub mod suggestions;

pub use categories::*;
pub use providers::*;
pub use services::*;
pub use suggestions::*;
