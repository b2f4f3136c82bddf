use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{PortfolioImageId, ServiceId};
use crate::domains::providers::models::{PortfolioImage, ProviderProfile};
use crate::domains::services::models::Service;

/// Public provider profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfileData {
    pub id: String,
    pub full_name: String,
    pub business_name: Option<String>,
    pub business_description: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub hourly_rate: Option<Decimal>,
    pub service_areas: Vec<String>,
    pub rating: Option<f64>,
    pub total_reviews: i32,
    pub profile_picture_url: Option<String>,
    pub city: Option<String>,

    // Location
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub service_radius_km: i32,

    pub is_active: bool,
    pub member_since: DateTime<Utc>,

    pub services: Vec<ProviderServiceData>,
    pub portfolio_images: Vec<PortfolioImageData>,
}

impl From<ProviderProfile> for ProviderProfileData {
    fn from(profile: ProviderProfile) -> Self {
        let ProviderProfile {
            provider,
            services,
            portfolio_images,
        } = profile;

        Self {
            id: provider.id.to_string(),
            full_name: provider.full_name(),
            business_name: provider.business_name,
            business_description: provider.business_description,
            hourly_rate: provider.hourly_rate,
            service_areas: provider.service_areas,
            rating: provider.rating,
            total_reviews: provider.total_reviews,
            profile_picture_url: provider.profile_picture_url,
            city: provider.city,
            latitude: provider.latitude,
            longitude: provider.longitude,
            service_radius_km: provider.service_radius_km,
            is_active: provider.is_active,
            member_since: provider.created_at,
            services: services.into_iter().map(ProviderServiceData::from).collect(),
            portfolio_images: portfolio_images
                .into_iter()
                .map(PortfolioImageData::from)
                .collect(),
        }
    }
}

/// Service row on a provider profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderServiceData {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub price_type: String,
    pub estimated_duration_minutes: i32,
    pub is_active: bool,
}

impl From<Service> for ProviderServiceData {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            category: service.category,
            base_price: service.base_price,
            price_type: service.price_type,
            estimated_duration_minutes: service.estimated_duration_minutes,
            is_active: service.is_active,
        }
    }
}

/// Portfolio image on a provider profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioImageData {
    pub id: PortfolioImageId,
    pub image_url: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<PortfolioImage> for PortfolioImageData {
    fn from(image: PortfolioImage) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url(),
            description: image.description,
            uploaded_at: image.uploaded_at,
        }
    }
}
