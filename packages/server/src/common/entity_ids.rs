//! Typed ID definitions for marketplace entities.
//!
//! Provider ids are opaque strings issued by the identity collaborator, so they get
//! a newtype to keep them from being mixed up with other text. Services,
//! categories and portfolio images are keyed by database integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed ID for provider (user) records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Typed ID for Service entities.
pub type ServiceId = i32;

/// Typed ID for ServiceCategory entities.
pub type CategoryId = i32;

/// Typed ID for PortfolioImage entities.
pub type PortfolioImageId = i32;
