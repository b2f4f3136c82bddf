pub mod portfolio_image;
pub mod provider;

pub use portfolio_image::*;
pub use provider::*;
