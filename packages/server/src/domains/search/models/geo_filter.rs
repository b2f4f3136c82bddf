//! Radius filtering over a candidate set.
//!
//! Runs in memory after the store returns candidates. A store-side bounding box
//! may have already narrowed the set; this pass is the precise one.

use crate::common::utils::{BoundingBox, GeoPoint};
use crate::domains::providers::models::Provider;

/// Center and radius of an active location filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl GeoFilter {
    /// Active only when latitude, longitude and radius are all present
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_km: Option<f64>,
    ) -> Option<Self> {
        let center = GeoPoint::from_parts(latitude, longitude)?;
        Some(Self {
            center,
            radius_km: radius_km?,
        })
    }

    /// Coarse pre-filter for stores that can use one
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::around(self.center, self.radius_km)
    }

    /// Decide whether `provider` stays, and its distance if one was computed.
    ///
    /// Providers with no coordinates pass with no distance. Providers with only
    /// one coordinate are dropped.
    pub fn admit(&self, provider: &Provider) -> Option<Option<f64>> {
        match provider.location() {
            Some(location) => {
                let distance = location.distance_km(&self.center);
                (distance <= self.radius_km).then_some(Some(distance))
            }
            None if provider.has_no_location() => Some(None),
            None => None,
        }
    }
}

/// A result with its distance from the search center, when computed
#[derive(Debug, Clone)]
pub struct Located<T> {
    pub item: T,
    pub distance_km: Option<f64>,
}

/// Keep the items within `geo`, attaching distances. With no filter every item
/// is kept and no distance is computed.
pub fn apply_geo_filter<T>(
    items: Vec<T>,
    geo: Option<&GeoFilter>,
    provider_of: impl Fn(&T) -> &Provider,
) -> Vec<Located<T>> {
    let Some(geo) = geo else {
        return items
            .into_iter()
            .map(|item| Located {
                item,
                distance_km: None,
            })
            .collect();
    };

    items
        .into_iter()
        .filter_map(|item| {
            let distance_km = geo.admit(provider_of(&item))?;
            Some(Located { item, distance_km })
        })
        .collect()
}
