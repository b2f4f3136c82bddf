//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain actions.
//! Persistence goes through the `BaseMarketplaceStore` trait so tests can swap in
//! the in-memory store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::instrument;

use crate::common::ProviderId;
use crate::domains::categories::models::{CategoryServiceRef, ServiceCategory};
use crate::domains::providers::models::{Provider, ProviderProfile};
use crate::domains::search::models::{
    ProviderCandidate, ProviderCandidateFilter, ServiceCandidate, ServiceCandidateFilter,
};
use crate::domains::services::models::Service;
use crate::kernel::BaseMarketplaceStore;

// =============================================================================
// PgMarketplaceStore (implements BaseMarketplaceStore trait)
// =============================================================================

/// Postgres-backed store delegating to the model queries
#[derive(Clone)]
pub struct PgMarketplaceStore {
    pool: PgPool,
}

impl PgMarketplaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseMarketplaceStore for PgMarketplaceStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_service_candidates(
        &self,
        filter: &ServiceCandidateFilter,
    ) -> Result<Vec<ServiceCandidate>> {
        ServiceCandidate::find_matching(filter, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn find_provider_candidates(
        &self,
        filter: &ProviderCandidateFilter,
    ) -> Result<Vec<ProviderCandidate>> {
        ProviderCandidate::find_matching(filter, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn suggest_service_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        Service::find_names_containing(term, limit, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn suggest_business_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        Provider::find_business_names_containing(term, limit, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn suggest_category_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        ServiceCategory::find_names_containing(term, limit, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn find_categories(&self, active_only: bool) -> Result<Vec<ServiceCategory>> {
        ServiceCategory::find_all(active_only, &self.pool).await
    }

    #[instrument(skip(self))]
    async fn find_active_service_categories(&self) -> Result<Vec<CategoryServiceRef>> {
        CategoryServiceRef::find_active(&self.pool).await
    }

    #[instrument(skip(self, id), fields(provider_id = %id))]
    async fn find_provider_profile(&self, id: &ProviderId) -> Result<Option<ProviderProfile>> {
        ProviderProfile::find_by_provider_id(id, &self.pool).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseMarketplaceStore>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given store
    pub fn new(store: Arc<dyn BaseMarketplaceStore>) -> Self {
        Self { store }
    }

    /// Production dependencies over a Postgres pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgMarketplaceStore::new(pool)))
    }
}
