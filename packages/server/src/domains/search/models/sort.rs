//! Sort keys for both search paths.
//!
//! Keys arrive as free text; unknown keys fall back to the path's default. Every
//! ordering ends with an id tie-break so pages are stable across requests.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domains::search::models::{Located, ProviderCandidate, ServiceCandidate};

/// Ordering of service search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceSort {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Distance,
    Newest,
}

impl ServiceSort {
    /// Case-insensitive lookup, falling back to [`ServiceSort::Relevance`]
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(|k| k.trim().to_lowercase()).as_deref() {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("rating") => Self::Rating,
            Some("distance") => Self::Distance,
            Some("newest") => Self::Newest,
            _ => Self::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Distance => "distance",
            Self::Newest => "newest",
        }
    }

    /// Distance ordering needs an active location filter
    pub fn effective(self, location_filter_active: bool) -> Self {
        match self {
            Self::Distance if !location_filter_active => Self::Relevance,
            other => other,
        }
    }
}

/// Ordering of provider search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderSort {
    #[default]
    Rating,
    Distance,
    Reviews,
    Newest,
    PriceLow,
    PriceHigh,
}

impl ProviderSort {
    /// Case-insensitive lookup, falling back to [`ProviderSort::Rating`]
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(|k| k.trim().to_lowercase()).as_deref() {
            Some("distance") => Self::Distance,
            Some("reviews") => Self::Reviews,
            Some("newest") => Self::Newest,
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            _ => Self::Rating,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Distance => "distance",
            Self::Reviews => "reviews",
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    /// Distance ordering needs an active location filter
    pub fn effective(self, location_filter_active: bool) -> Self {
        match self {
            Self::Distance if !location_filter_active => Self::Rating,
            other => other,
        }
    }
}

// =============================================================================
// Comparators
// =============================================================================

/// Unrated sorts as 0
fn rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}

/// Missing distance sorts last
fn distance_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(f64::INFINITY)
        .total_cmp(&b.unwrap_or(f64::INFINITY))
}

/// Missing rate sorts last
fn rate_asc(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Missing rate sorts as 0
fn rate_desc(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    b.unwrap_or(Decimal::ZERO).cmp(&a.unwrap_or(Decimal::ZERO))
}

/// Sort service results in place
pub fn sort_services(results: &mut [Located<ServiceCandidate>], sort: ServiceSort) {
    results.sort_by(|a, b| {
        let (sa, sb) = (&a.item.service, &b.item.service);
        let (pa, pb) = (&a.item.provider, &b.item.provider);

        let primary = match sort {
            ServiceSort::PriceLow => sa.base_price.cmp(&sb.base_price),
            ServiceSort::PriceHigh => sb.base_price.cmp(&sa.base_price),
            ServiceSort::Rating => rating_desc(pa.rating, pb.rating),
            ServiceSort::Distance => distance_asc(a.distance_km, b.distance_km),
            ServiceSort::Newest => sb.created_at.cmp(&sa.created_at),
            ServiceSort::Relevance => rating_desc(pa.rating, pb.rating)
                .then_with(|| distance_asc(a.distance_km, b.distance_km)),
        };

        primary.then_with(|| sa.id.cmp(&sb.id))
    });
}

/// Sort provider results in place
pub fn sort_providers(results: &mut [Located<ProviderCandidate>], sort: ProviderSort) {
    results.sort_by(|a, b| {
        let (pa, pb) = (&a.item.provider, &b.item.provider);

        let primary = match sort {
            ProviderSort::Distance => distance_asc(a.distance_km, b.distance_km),
            ProviderSort::Reviews => pb.total_reviews.cmp(&pa.total_reviews),
            ProviderSort::Newest => pb.created_at.cmp(&pa.created_at),
            ProviderSort::PriceLow => rate_asc(pa.hourly_rate, pb.hourly_rate),
            ProviderSort::PriceHigh => rate_desc(pa.hourly_rate, pb.hourly_rate),
            ProviderSort::Rating => rating_desc(pa.rating, pb.rating)
                .then_with(|| pb.total_reviews.cmp(&pa.total_reviews)),
        };

        primary.then_with(|| pa.id.cmp(&pb.id))
    });
}
