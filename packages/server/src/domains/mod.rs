// Business domains
pub mod categories;
pub mod providers;
pub mod search;
pub mod services;
