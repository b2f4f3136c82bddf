use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::utils::round_km;
use crate::common::{Page, ServiceId};
use crate::domains::search::models::{Located, ServiceCandidate};

/// One row of a service search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSearchResultData {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub price_type: String,
    pub estimated_duration_minutes: i32,

    // Provider snapshot
    pub provider_id: String,
    pub provider_name: String,
    pub business_name: Option<String>,
    pub provider_rating: Option<f64>,
    pub provider_total_reviews: i32,
    pub provider_city: Option<String>,
    pub provider_profile_picture: Option<String>,

    /// Rounded to 0.1 km; null when no location filter ran or the provider has
    /// no coordinates
    pub distance_km: Option<f64>,
}

impl From<Located<ServiceCandidate>> for ServiceSearchResultData {
    fn from(located: Located<ServiceCandidate>) -> Self {
        let ServiceCandidate { service, provider } = located.item;
        let provider_name = provider.full_name();

        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            category: service.category,
            base_price: service.base_price,
            price_type: service.price_type,
            estimated_duration_minutes: service.estimated_duration_minutes,
            provider_id: provider.id.into_inner(),
            provider_name,
            business_name: provider.business_name,
            provider_rating: provider.rating,
            provider_total_reviews: provider.total_reviews,
            provider_city: provider.city,
            provider_profile_picture: provider.profile_picture_url,
            distance_km: located.distance_km.map(round_km),
        }
    }
}

/// Filters echoed back with service results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFiltersApplied {
    pub query: Option<String>,
    pub category: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub min_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub radius_km: Option<f64>,
    pub location_filter_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchServicesResponse {
    pub services: Vec<ServiceSearchResultData>,
    pub total_count: usize,
    pub total_pages: u32,
    pub current_page: u32,
    pub filters_applied: ServiceFiltersApplied,
}

impl SearchServicesResponse {
    pub fn from_page(page: Page<ServiceSearchResultData>, filters_applied: ServiceFiltersApplied) -> Self {
        Self {
            services: page.items,
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
            filters_applied,
        }
    }
}
