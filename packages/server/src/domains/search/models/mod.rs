pub mod candidate;
pub mod category_stats;
pub mod filters;
pub mod geo_filter;
pub mod sort;

pub use candidate::*;
pub use category_stats::*;
pub use filters::*;
pub use geo_filter::*;
pub use sort::*;
