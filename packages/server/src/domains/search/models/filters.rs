//! Candidate filters - the predicates a store evaluates before the geo stage.
//!
//! `matches` is the reference semantics. The Postgres store pushes the same
//! predicates into SQL, and the in-memory store calls `matches` directly.

use rust_decimal::Decimal;

use crate::common::utils::{contains_ci, contains_ci_opt, eq_ci, BoundingBox};
use crate::domains::providers::models::Provider;
use crate::domains::services::models::{PriceType, Service};

/// Store-side predicates for service search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceCandidateFilter {
    /// Substring of service name, description, category or business name
    pub query: Option<String>,
    /// Exact category, case-insensitive
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub price_type: Option<PriceType>,
    /// Providers without a rating fail this
    pub min_rating: Option<f64>,
    /// Coarse location hint. Stores may ignore it; null-location providers must
    /// still be returned when they honor it.
    pub bounds: Option<BoundingBox>,
}

impl ServiceCandidateFilter {
    /// Whether `service`, offered by `provider`, is a candidate. Ignores `bounds`.
    pub fn matches(&self, service: &Service, provider: &Provider) -> bool {
        if !service.is_active || !provider.is_listed() {
            return false;
        }

        if let Some(query) = &self.query {
            let hit = contains_ci(&service.name, query)
                || contains_ci(&service.description, query)
                || contains_ci(&service.category, query)
                || contains_ci_opt(provider.business_name.as_deref(), query);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !eq_ci(&service.category, category) {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| service.base_price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| service.base_price > max) {
            return false;
        }

        if let Some(kind) = self.price_type {
            if !eq_ci(&service.price_type, kind.as_str()) {
                return false;
            }
        }

        passes_min_rating(provider, self.min_rating)
    }
}

/// Store-side predicates for provider search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderCandidateFilter {
    /// Substring of business name, description, first/last name or any active
    /// service name
    pub query: Option<String>,
    /// Provider must offer an active service in this category
    pub category: Option<String>,
    /// Substring of the city
    pub city: Option<String>,
    /// Substring of any service-area tag
    pub service_area: Option<String>,
    pub min_rating: Option<f64>,
    pub bounds: Option<BoundingBox>,
}

impl ProviderCandidateFilter {
    /// Whether `provider` is a candidate, given all of its services. Ignores `bounds`.
    pub fn matches(&self, provider: &Provider, services: &[Service]) -> bool {
        if !provider.is_listed() {
            return false;
        }

        let mut active_services = services
            .iter()
            .filter(|s| s.is_active && s.provider_id == provider.id);

        if let Some(query) = &self.query {
            let hit = contains_ci_opt(provider.business_name.as_deref(), query)
                || contains_ci_opt(provider.business_description.as_deref(), query)
                || contains_ci(&provider.first_name, query)
                || contains_ci(&provider.last_name, query)
                || active_services.clone().any(|s| contains_ci(&s.name, query));
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !active_services.any(|s| eq_ci(&s.category, category)) {
                return false;
            }
        }

        if let Some(city) = &self.city {
            if !contains_ci_opt(provider.city.as_deref(), city) {
                return false;
            }
        }

        if let Some(area) = &self.service_area {
            if !provider.service_areas.iter().any(|a| contains_ci(a, area)) {
                return false;
            }
        }

        passes_min_rating(provider, self.min_rating)
    }
}

fn passes_min_rating(provider: &Provider, min_rating: Option<f64>) -> bool {
    match min_rating {
        Some(min) => provider.rating.is_some_and(|rating| rating >= min),
        None => true,
    }
}
