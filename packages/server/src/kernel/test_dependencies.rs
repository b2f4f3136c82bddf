// In-memory marketplace store - used by tests and local runs without Postgres
//
// Evaluates the same candidate predicates as the SQL queries, using the
// `matches` methods on the filter types. Data is fixed once built.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::{BaseMarketplaceStore, ServerDeps};
use crate::common::utils::{contains_ci, BoundingBox};
use crate::common::ProviderId;
use crate::domains::categories::models::{CategoryServiceRef, ServiceCategory};
use crate::domains::providers::models::{PortfolioImage, Provider, ProviderProfile};
use crate::domains::search::models::{
    ProviderCandidate, ProviderCandidateFilter, ServiceCandidate, ServiceCandidateFilter,
};
use crate::domains::services::models::Service;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketplaceStore {
    providers: Vec<Provider>,
    services: Vec<Service>,
    categories: Vec<ServiceCategory>,
    portfolio_images: Vec<PortfolioImage>,
    failure: Option<String>,
}

impl InMemoryMarketplaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn with_category(mut self, category: ServiceCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_portfolio_image(mut self, image: PortfolioImage) -> Self {
        self.portfolio_images.push(image);
        self
    }

    /// Make every call fail with `message`, as an unreachable database would
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self))
    }

    fn check_available(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    fn provider(&self, id: &ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| &p.id == id)
    }

    fn services_by_id(&self) -> Vec<&Service> {
        let mut services: Vec<&Service> = self.services.iter().collect();
        services.sort_by_key(|s| s.id);
        services
    }

    fn providers_by_id(&self) -> Vec<&Provider> {
        let mut providers: Vec<&Provider> = self.providers.iter().collect();
        providers.sort_by(|a, b| a.id.cmp(&b.id));
        providers
    }

    fn provider_services(&self, id: &ProviderId) -> Vec<Service> {
        self.services_by_id()
            .into_iter()
            .filter(|s| &s.provider_id == id)
            .cloned()
            .collect()
    }
}

/// Same rule as the SQL pre-filter: no-location providers always pass, half
/// located ones never do.
fn within_bounds(provider: &Provider, bounds: Option<BoundingBox>) -> bool {
    match bounds {
        None => true,
        Some(bounds) => {
            provider.has_no_location() || provider.location().is_some_and(|p| bounds.contains(p))
        }
    }
}

fn push_distinct(names: &mut Vec<String>, name: &str, limit: usize) {
    if names.len() < limit && !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

#[async_trait]
impl BaseMarketplaceStore for InMemoryMarketplaceStore {
    async fn ping(&self) -> Result<()> {
        self.check_available()
    }

    async fn find_service_candidates(
        &self,
        filter: &ServiceCandidateFilter,
    ) -> Result<Vec<ServiceCandidate>> {
        self.check_available()?;

        Ok(self
            .services_by_id()
            .into_iter()
            .filter_map(|service| {
                let provider = self.provider(&service.provider_id)?;
                (filter.matches(service, provider) && within_bounds(provider, filter.bounds))
                    .then(|| ServiceCandidate {
                        service: service.clone(),
                        provider: provider.clone(),
                    })
            })
            .collect())
    }

    async fn find_provider_candidates(
        &self,
        filter: &ProviderCandidateFilter,
    ) -> Result<Vec<ProviderCandidate>> {
        self.check_available()?;

        let mut candidates = Vec::new();
        for provider in self.providers_by_id() {
            let services = self.provider_services(&provider.id);
            if !filter.matches(provider, &services) || !within_bounds(provider, filter.bounds) {
                continue;
            }

            let mut categories: Vec<String> = Vec::new();
            let mut active_service_count = 0;
            for service in services.iter().filter(|s| s.is_active) {
                active_service_count += 1;
                push_distinct(&mut categories, &service.category, usize::MAX);
            }

            let portfolio_image_count = self
                .portfolio_images
                .iter()
                .filter(|image| image.provider_id == provider.id)
                .count() as i64;

            candidates.push(ProviderCandidate {
                provider: provider.clone(),
                categories,
                active_service_count,
                portfolio_image_count,
            });
        }

        Ok(candidates)
    }

    async fn suggest_service_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        self.check_available()?;

        let mut names = Vec::new();
        for service in self.services_by_id() {
            if service.is_active && contains_ci(&service.name, term) {
                push_distinct(&mut names, &service.name, limit);
            }
        }
        Ok(names)
    }

    async fn suggest_business_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        self.check_available()?;

        let mut names = Vec::new();
        for provider in self.providers_by_id() {
            if !provider.is_active {
                continue;
            }
            if let Some(name) = provider.business_name.as_deref() {
                if contains_ci(name, term) {
                    push_distinct(&mut names, name, limit);
                }
            }
        }
        Ok(names)
    }

    async fn suggest_category_names(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        self.check_available()?;

        let mut categories: Vec<&ServiceCategory> = self
            .categories
            .iter()
            .filter(|c| c.is_active && contains_ci(&c.name, term))
            .collect();
        categories.sort_by_key(|c| c.id);

        Ok(categories
            .into_iter()
            .take(limit)
            .map(|c| c.name.clone())
            .collect())
    }

    async fn find_categories(&self, active_only: bool) -> Result<Vec<ServiceCategory>> {
        self.check_available()?;

        let mut categories: Vec<ServiceCategory> = self
            .categories
            .iter()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.display_order, c.id));
        Ok(categories)
    }

    async fn find_active_service_categories(&self) -> Result<Vec<CategoryServiceRef>> {
        self.check_available()?;

        Ok(self
            .services_by_id()
            .into_iter()
            .filter(|s| s.is_active)
            .filter_map(|service| {
                let provider = self.provider(&service.provider_id)?;
                Some(CategoryServiceRef {
                    category: service.category.clone(),
                    provider_id: service.provider_id.clone(),
                    provider_active: provider.is_active,
                })
            })
            .collect())
    }

    async fn find_provider_profile(&self, id: &ProviderId) -> Result<Option<ProviderProfile>> {
        self.check_available()?;

        let Some(provider) = self.provider(id).filter(|p| p.business_name.is_some()) else {
            return Ok(None);
        };

        let mut portfolio_images: Vec<PortfolioImage> = self
            .portfolio_images
            .iter()
            .filter(|image| &image.provider_id == id)
            .cloned()
            .collect();
        portfolio_images.sort_by_key(|image| (image.display_order, image.id));

        Ok(Some(ProviderProfile {
            provider: provider.clone(),
            services: self.provider_services(id),
            portfolio_images,
        }))
    }
}
