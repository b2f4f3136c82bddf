// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Sorting, distance and pagination live in the search domain; stores only
// evaluate candidate predicates and simple lookups.
//
// Naming convention: Base* for trait names (e.g., BaseMarketplaceStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::ProviderId;
use crate::domains::categories::models::{CategoryServiceRef, ServiceCategory};
use crate::domains::providers::models::ProviderProfile;
use crate::domains::search::models::{
    ProviderCandidate, ProviderCandidateFilter, ServiceCandidate, ServiceCandidateFilter,
};

// =============================================================================
// Marketplace Store Trait (Infrastructure - read-only persistence)
// =============================================================================

#[async_trait]
pub trait BaseMarketplaceStore: Send + Sync {
    /// Cheap liveness probe used by the health check
    async fn ping(&self) -> Result<()>;

    /// Services passing `filter`, with their providers, in service id order.
    /// Honoring `filter.bounds` is optional.
    async fn find_service_candidates(
        &self,
        filter: &ServiceCandidateFilter,
    ) -> Result<Vec<ServiceCandidate>>;

    /// Providers passing `filter`, with their aggregates, in provider id order.
    /// Honoring `filter.bounds` is optional.
    async fn find_provider_candidates(
        &self,
        filter: &ProviderCandidateFilter,
    ) -> Result<Vec<ProviderCandidate>>;

    /// Distinct names of active services containing `term`
    async fn suggest_service_names(&self, term: &str, limit: usize) -> Result<Vec<String>>;

    /// Distinct business names of active providers containing `term`
    async fn suggest_business_names(&self, term: &str, limit: usize) -> Result<Vec<String>>;

    /// Names of active categories containing `term`
    async fn suggest_category_names(&self, term: &str, limit: usize) -> Result<Vec<String>>;

    /// Catalog categories ordered by display order, then id
    async fn find_categories(&self, active_only: bool) -> Result<Vec<ServiceCategory>>;

    /// Every active service's category and owner state
    async fn find_active_service_categories(&self) -> Result<Vec<CategoryServiceRef>>;

    /// Public profile, or `None` for unknown ids and non-provider records
    async fn find_provider_profile(&self, id: &ProviderId) -> Result<Option<ProviderProfile>>;
}
