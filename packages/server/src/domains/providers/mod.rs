//! Providers domain - marketplace businesses and their public profiles

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{PortfolioImageData, ProviderProfileData, ProviderServiceData};
pub use models::{PortfolioImage, Provider, ProviderProfile};
