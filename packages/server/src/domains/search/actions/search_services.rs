//! Service search
//!
//! Candidate filter (store) → geo filter → sort → paginate → project.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::common::{paginate, PageRequest};
use crate::domains::search::data::{
    SearchServicesResponse, ServiceFiltersApplied, ServiceSearchResultData,
};
use crate::domains::search::models::{
    apply_geo_filter, sort_services, GeoFilter, ServiceCandidateFilter, ServiceSort,
};
use crate::domains::services::models::PriceType;
use crate::kernel::ServerDeps;

/// Validated service search input. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceSearchQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub price_type: Option<PriceType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_km: Option<f64>,
    pub min_rating: Option<f64>,
    pub page: PageRequest,
    pub sort: ServiceSort,
}

impl ServiceSearchQuery {
    fn geo_filter(&self) -> Option<GeoFilter> {
        GeoFilter::from_parts(self.latitude, self.longitude, self.radius_km)
    }

    fn candidate_filter(&self, geo: Option<&GeoFilter>) -> ServiceCandidateFilter {
        ServiceCandidateFilter {
            query: non_empty(&self.query),
            category: non_empty(&self.category),
            min_price: self.min_price,
            max_price: self.max_price,
            price_type: self.price_type,
            min_rating: self.min_rating,
            bounds: geo.and_then(GeoFilter::bounding_box),
        }
    }

    fn filters_applied(&self, location_filter_active: bool) -> ServiceFiltersApplied {
        ServiceFiltersApplied {
            query: self.query.clone(),
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
            radius_km: self.radius_km,
            location_filter_active,
        }
    }
}

/// Search active services of listed providers
pub async fn search_services(
    query: ServiceSearchQuery,
    deps: &ServerDeps,
) -> Result<SearchServicesResponse> {
    let geo = query.geo_filter();
    let filter = query.candidate_filter(geo.as_ref());

    let candidates = deps
        .store
        .find_service_candidates(&filter)
        .await
        .context("Failed to load service candidates")?;

    debug!(
        candidates = candidates.len(),
        location_filter_active = geo.is_some(),
        "Loaded service candidates"
    );

    let mut located = apply_geo_filter(candidates, geo.as_ref(), |c| &c.provider);

    let sort = query.sort.effective(geo.is_some());
    sort_services(&mut located, sort);

    let page = paginate(located, query.page).map(ServiceSearchResultData::from);

    info!(
        query = ?query.query,
        sort = sort.as_str(),
        total_count = page.total_count,
        page = page.current_page,
        "Service search complete"
    );

    Ok(SearchServicesResponse::from_page(
        page,
        query.filters_applied(geo.is_some()),
    ))
}

/// Treat empty text as absent
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}
