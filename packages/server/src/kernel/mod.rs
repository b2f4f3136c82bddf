//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{PgMarketplaceStore, ServerDeps};
pub use test_dependencies::InMemoryMarketplaceStore;
pub use traits::*;
