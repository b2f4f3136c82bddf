//! Provider search
//!
//! Same stages as service search, over providers with their service aggregates.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::common::{paginate, PageRequest};
use crate::domains::search::actions::search_services::non_empty;
use crate::domains::search::data::{
    ProviderFiltersApplied, ProviderSearchResultData, SearchProvidersResponse,
};
use crate::domains::search::models::{
    apply_geo_filter, sort_providers, GeoFilter, ProviderCandidateFilter, ProviderSort,
};
use crate::kernel::ServerDeps;

/// Validated provider search input. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSearchQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub service_area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_km: Option<f64>,
    pub min_rating: Option<f64>,
    pub page: PageRequest,
    pub sort: ProviderSort,
}

impl ProviderSearchQuery {
    fn candidate_filter(&self, geo: Option<&GeoFilter>) -> ProviderCandidateFilter {
        ProviderCandidateFilter {
            query: non_empty(&self.query),
            category: non_empty(&self.category),
            city: non_empty(&self.city),
            service_area: non_empty(&self.service_area),
            min_rating: self.min_rating,
            bounds: geo.and_then(GeoFilter::bounding_box),
        }
    }

    fn filters_applied(&self, location_filter_active: bool) -> ProviderFiltersApplied {
        ProviderFiltersApplied {
            query: self.query.clone(),
            category: self.category.clone(),
            city: self.city.clone(),
            service_area: self.service_area.clone(),
            min_rating: self.min_rating,
            radius_km: self.radius_km,
            location_filter_active,
        }
    }
}

/// Search listed providers
pub async fn search_providers(
    query: ProviderSearchQuery,
    deps: &ServerDeps,
) -> Result<SearchProvidersResponse> {
    let geo = GeoFilter::from_parts(query.latitude, query.longitude, query.radius_km);
    let filter = query.candidate_filter(geo.as_ref());

    let candidates = deps
        .store
        .find_provider_candidates(&filter)
        .await
        .context("Failed to load provider candidates")?;

    debug!(
        candidates = candidates.len(),
        location_filter_active = geo.is_some(),
        "Loaded provider candidates"
    );

    let mut located = apply_geo_filter(candidates, geo.as_ref(), |c| &c.provider);

    let sort = query.sort.effective(geo.is_some());
    sort_providers(&mut located, sort);

    let page = paginate(located, query.page).map(ProviderSearchResultData::from);

    info!(
        query = ?query.query,
        sort = sort.as_str(),
        total_count = page.total_count,
        page = page.current_page,
        "Provider search complete"
    );

    Ok(SearchProvidersResponse::from_page(
        page,
        query.filters_applied(geo.is_some()),
    ))
}
