//! Anonymous search routes.
//!
//! Query parameters arrive as raw strings and are parsed leniently: anything
//! malformed is treated as absent, and a repeated key keeps its first value, so
//! these routes only fail when the store does.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    extract::{Extension, Query},
    Json,
};
use rust_decimal::Decimal;
use crate::common::PageRequest;
use crate::domains::search::actions::{
    get_categories, get_search_suggestions, search_providers, search_services,
    ProviderSearchQuery, ServiceSearchQuery, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT,
};
use crate::domains::search::data::{
    CategoryData, SearchProvidersResponse, SearchServicesResponse, SearchSuggestionsData,
};
use crate::domains::search::models::{ProviderSort, ServiceSort};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

// =============================================================================
// Lenient parsing
// =============================================================================

/// Raw query pairs. Extracting a list of pairs accepts any query string,
/// including repeated keys.
type QueryPairs = Query<Vec<(String, String)>>;

/// Query string keyed by name, first occurrence wins
#[derive(Debug, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            values.entry(key).or_insert(value);
        }
        Self(values)
    }

    fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

/// Non-blank text, unchanged
fn text(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn number<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Finite floats only; NaN and infinities are dropped
fn float(raw: Option<&str>) -> Option<f64> {
    number::<f64>(raw).filter(|value| value.is_finite())
}

fn decimal(raw: Option<&str>) -> Option<Decimal> {
    number(raw)
}

fn flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|value| value.trim().to_lowercase()).as_deref() {
        Some("true" | "1" | "yes") => true,
        Some("false" | "0" | "no") => false,
        _ => default,
    }
}

fn page_request(page: Option<&str>, page_size: Option<&str>) -> PageRequest {
    PageRequest::clamped(number(page), number(page_size))
}

fn suggestion_limit(raw: Option<&str>) -> usize {
    match number::<i64>(raw) {
        Some(limit) if limit > 0 && limit <= MAX_SUGGESTION_LIMIT as i64 => limit as usize,
        _ => DEFAULT_SUGGESTION_LIMIT,
    }
}

// =============================================================================
// Services
// =============================================================================

#[derive(Debug, Default)]
pub struct ServiceSearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub price_type: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub min_rating: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
}

impl From<QueryParams> for ServiceSearchParams {
    fn from(mut raw: QueryParams) -> Self {
        Self {
            q: raw.take("q"),
            category: raw.take("category"),
            min_price: raw.take("minPrice"),
            max_price: raw.take("maxPrice"),
            price_type: raw.take("priceType"),
            lat: raw.take("lat"),
            lng: raw.take("lng"),
            radius: raw.take("radius"),
            min_rating: raw.take("minRating"),
            page: raw.take("page"),
            page_size: raw.take("pageSize"),
            sort_by: raw.take("sortBy"),
        }
    }
}

impl From<ServiceSearchParams> for ServiceSearchQuery {
    fn from(params: ServiceSearchParams) -> Self {
        Self {
            min_price: decimal(params.min_price.as_deref()),
            max_price: decimal(params.max_price.as_deref()),
            price_type: params.price_type.as_deref().and_then(|v| v.parse().ok()),
            latitude: float(params.lat.as_deref()),
            longitude: float(params.lng.as_deref()),
            radius_km: float(params.radius.as_deref()),
            min_rating: float(params.min_rating.as_deref()),
            page: page_request(params.page.as_deref(), params.page_size.as_deref()),
            sort: ServiceSort::from_key(params.sort_by.as_deref()),
            query: text(params.q),
            category: text(params.category),
        }
    }
}

/// GET /api/search/services
pub async fn search_services_handler(
    Extension(state): Extension<AxumAppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<SearchServicesResponse>, ApiError> {
    let params = ServiceSearchParams::from(QueryParams::from_pairs(pairs));
    let response = search_services(params.into(), &state.deps).await?;
    Ok(Json(response))
}

// =============================================================================
// Providers
// =============================================================================

#[derive(Debug, Default)]
pub struct ProviderSearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub service_area: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub min_rating: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
}

impl From<QueryParams> for ProviderSearchParams {
    fn from(mut raw: QueryParams) -> Self {
        Self {
            q: raw.take("q"),
            category: raw.take("category"),
            city: raw.take("city"),
            service_area: raw.take("serviceArea"),
            lat: raw.take("lat"),
            lng: raw.take("lng"),
            radius: raw.take("radius"),
            min_rating: raw.take("minRating"),
            page: raw.take("page"),
            page_size: raw.take("pageSize"),
            sort_by: raw.take("sortBy"),
        }
    }
}

impl From<ProviderSearchParams> for ProviderSearchQuery {
    fn from(params: ProviderSearchParams) -> Self {
        Self {
            latitude: float(params.lat.as_deref()),
            longitude: float(params.lng.as_deref()),
            radius_km: float(params.radius.as_deref()),
            min_rating: float(params.min_rating.as_deref()),
            page: page_request(params.page.as_deref(), params.page_size.as_deref()),
            sort: ProviderSort::from_key(params.sort_by.as_deref()),
            query: text(params.q),
            category: text(params.category),
            city: text(params.city),
            service_area: text(params.service_area),
        }
    }
}

/// GET /api/search/providers
pub async fn search_providers_handler(
    Extension(state): Extension<AxumAppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<SearchProvidersResponse>, ApiError> {
    let params = ProviderSearchParams::from(QueryParams::from_pairs(pairs));
    let response = search_providers(params.into(), &state.deps).await?;
    Ok(Json(response))
}

// =============================================================================
// Categories & suggestions
// =============================================================================

#[derive(Debug, Default)]
pub struct CategoryParams {
    pub active_only: Option<String>,
}

impl From<QueryParams> for CategoryParams {
    fn from(mut raw: QueryParams) -> Self {
        Self {
            active_only: raw.take("activeOnly"),
        }
    }
}

/// GET /api/search/categories
pub async fn categories_handler(
    Extension(state): Extension<AxumAppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<Vec<CategoryData>>, ApiError> {
    let params = CategoryParams::from(QueryParams::from_pairs(pairs));
    let active_only = flag(params.active_only.as_deref(), true);
    let categories = get_categories(active_only, &state.deps).await?;
    Ok(Json(categories))
}

#[derive(Debug, Default)]
pub struct SuggestionParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

impl From<QueryParams> for SuggestionParams {
    fn from(mut raw: QueryParams) -> Self {
        Self {
            q: raw.take("q"),
            limit: raw.take("limit"),
        }
    }
}

/// GET /api/search/suggestions
pub async fn suggestions_handler(
    Extension(state): Extension<AxumAppState>,
    Query(pairs): QueryPairs,
) -> Result<Json<SearchSuggestionsData>, ApiError> {
    let params = SuggestionParams::from(QueryParams::from_pairs(pairs));
    let limit = suggestion_limit(params.limit.as_deref());
    let term = params.q.unwrap_or_default();
    let suggestions = get_search_suggestions(&term, limit, &state.deps).await?;
    Ok(Json(suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::services::models::PriceType;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_malformed_numbers_become_absent() {
        let query = ServiceSearchQuery::from(ServiceSearchParams {
            min_price: s("xyz"),
            max_price: s("250.50"),
            lat: s("NaN"),
            lng: s("inf"),
            radius: s("10"),
            page: s("-3"),
            page_size: s("abc"),
            ..Default::default()
        });

        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, Some(Decimal::new(25050, 2)));
        assert_eq!(query.latitude, None);
        assert_eq!(query.longitude, None);
        assert_eq!(query.radius_km, Some(10.0));
        assert_eq!(query.page, PageRequest::new(1, 20));
    }

    #[test]
    fn test_blank_text_and_unknown_price_type() {
        let query = ServiceSearchQuery::from(ServiceSearchParams {
            q: s("   "),
            category: s("Plumbing"),
            price_type: s("per-visit"),
            sort_by: s("PRICE-HIGH"),
            ..Default::default()
        });

        assert_eq!(query.query, None);
        assert_eq!(query.category, s("Plumbing"));
        assert_eq!(query.price_type, None);
        assert_eq!(query.sort, ServiceSort::PriceHigh);

        let fixed = ServiceSearchQuery::from(ServiceSearchParams {
            price_type: s("fixed"),
            ..Default::default()
        });
        assert_eq!(fixed.price_type, Some(PriceType::Fixed));
    }

    #[test]
    fn test_provider_params_defaults() {
        let query = ProviderSearchQuery::from(ProviderSearchParams::default());
        assert_eq!(query, ProviderSearchQuery::default());
        assert_eq!(query.sort, ProviderSort::Rating);
    }

    #[test]
    fn test_suggestion_limit_clamping() {
        assert_eq!(suggestion_limit(None), 5);
        assert_eq!(suggestion_limit(Some("0")), 5);
        assert_eq!(suggestion_limit(Some("11")), 5);
        assert_eq!(suggestion_limit(Some("10")), 10);
        assert_eq!(suggestion_limit(Some("three")), 5);
    }

    fn pairs(raw: &[(&str, &str)]) -> QueryParams {
        QueryParams::from_pairs(
            raw.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let params = ServiceSearchParams::from(pairs(&[
            ("q", "plumb"),
            ("q", "john"),
            ("page", "2"),
            ("page", "9"),
            ("minPrice", "10"),
        ]));

        assert_eq!(params.q, s("plumb"));
        assert_eq!(params.page, s("2"));
        assert_eq!(params.min_price, s("10"));
        assert_eq!(params.max_price, None);
    }

    #[test]
    fn test_query_keys_are_camel_case() {
        let params = ProviderSearchParams::from(pairs(&[
            ("serviceArea", "Downtown"),
            ("service_area", "Ignored"),
            ("sortBy", "reviews"),
        ]));
        assert_eq!(params.service_area, s("Downtown"));
        assert_eq!(params.sort_by, s("reviews"));

        let categories = CategoryParams::from(pairs(&[("activeOnly", "false")]));
        assert_eq!(categories.active_only, s("false"));
    }

    #[test]
    fn test_flag_parsing() {
        assert!(flag(None, true));
        assert!(!flag(Some("false"), true));
        assert!(flag(Some("TRUE"), false));
        assert!(flag(Some("maybe"), true));
    }
}
