use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Mean Earth radius used by every distance calculation
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack added to bounding boxes so boundary points survive float rounding
const BOUNDS_PADDING_DEG: f64 = 1e-6;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from optional coordinates. Both halves must be present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        calculate_distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Calculate distance between two coordinates in kilometers
///
/// Uses Haversine formula for accuracy on Earth's surface
///
/// # Arguments
/// * `lat1`, `lng1` - First coordinate
/// * `lat2`, `lng2` - Second coordinate
///
/// # Returns
/// Distance in kilometers
pub fn calculate_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to one decimal place for display. Midpoints go to the even
/// tenth.
///
/// # Example
/// ```
/// use marketplace_core::common::utils::round_km;
/// assert_eq!(round_km(1.2345), 1.2);
/// assert_eq!(round_km(1.25), 1.2);
/// ```
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 10.0).round_ties_even() / 10.0
}

/// Lat/lng rectangle enclosing every point within a radius of a center
///
/// Stores use it as a coarse index-friendly pre-filter. The precise Haversine
/// check still runs afterwards, so the box only has to be a superset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Box around `center` covering `radius_km`.
    ///
    /// Returns `None` when no simple box exists: negative or non-finite radius,
    /// a circle reaching a pole, or one wrapping the antimeridian. Callers then
    /// skip the pre-filter entirely.
    pub fn around(center: GeoPoint, radius_km: f64) -> Option<Self> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return None;
        }
        if !center.latitude.is_finite() || !center.longitude.is_finite() {
            return None;
        }

        let angular = radius_km / EARTH_RADIUS_KM;
        let lat = center.latitude.to_radians();

        let min_lat = lat - angular;
        let max_lat = lat + angular;
        if min_lat <= -FRAC_PI_2 || max_lat >= FRAC_PI_2 {
            return None;
        }

        // Widest longitude offset reached by the circle at this latitude
        let delta_lng = (angular.sin() / lat.cos()).asin().to_degrees();
        let min_lng = center.longitude - delta_lng;
        let max_lng = center.longitude + delta_lng;
        if min_lng < -180.0 || max_lng > 180.0 {
            return None;
        }

        Some(Self {
            min_lat: min_lat.to_degrees() - BOUNDS_PADDING_DEG,
            max_lat: max_lat.to_degrees() + BOUNDS_PADDING_DEG,
            min_lng: min_lng - BOUNDS_PADDING_DEG,
            max_lng: max_lng + BOUNDS_PADDING_DEG,
        })
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }
}
