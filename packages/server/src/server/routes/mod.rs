// HTTP routes
pub mod health;
pub mod providers;
pub mod search;

pub use health::*;
pub use providers::*;
pub use search::*;
