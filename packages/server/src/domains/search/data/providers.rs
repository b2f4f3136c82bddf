use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::utils::round_km;
use crate::common::Page;
use crate::domains::search::models::{Located, ProviderCandidate};

/// One row of a provider search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSearchResultData {
    pub id: String,
    pub full_name: String,
    pub business_name: String,
    pub business_description: Option<String>,
    pub rating: Option<f64>,
    pub total_reviews: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub hourly_rate: Option<Decimal>,
    pub city: Option<String>,
    pub service_areas: Vec<String>,
    pub profile_picture_url: Option<String>,
    /// Active services only
    pub service_count: i64,
    pub portfolio_image_count: i64,
    pub categories: Vec<String>,
    pub distance_km: Option<f64>,
    pub member_since: DateTime<Utc>,
}

impl From<Located<ProviderCandidate>> for ProviderSearchResultData {
    fn from(located: Located<ProviderCandidate>) -> Self {
        let ProviderCandidate {
            provider,
            categories,
            active_service_count,
            portfolio_image_count,
        } = located.item;
        let full_name = provider.full_name();

        Self {
            id: provider.id.into_inner(),
            full_name,
            // Candidates always carry a business name
            business_name: provider.business_name.unwrap_or_default(),
            business_description: provider.business_description,
            rating: provider.rating,
            total_reviews: provider.total_reviews,
            hourly_rate: provider.hourly_rate,
            city: provider.city,
            service_areas: provider.service_areas,
            profile_picture_url: provider.profile_picture_url,
            service_count: active_service_count,
            portfolio_image_count,
            categories,
            distance_km: located.distance_km.map(round_km),
            member_since: provider.created_at,
        }
    }
}

/// Filters echoed back with provider results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFiltersApplied {
    pub query: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub service_area: Option<String>,
    pub min_rating: Option<f64>,
    pub radius_km: Option<f64>,
    pub location_filter_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProvidersResponse {
    pub providers: Vec<ProviderSearchResultData>,
    pub total_count: usize,
    pub total_pages: u32,
    pub current_page: u32,
    pub filters_applied: ProviderFiltersApplied,
}

impl SearchProvidersResponse {
    pub fn from_page(
        page: Page<ProviderSearchResultData>,
        filters_applied: ProviderFiltersApplied,
    ) -> Self {
        Self {
            providers: page.items,
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
            filters_applied,
        }
    }
}
