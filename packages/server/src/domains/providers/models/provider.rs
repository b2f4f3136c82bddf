use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::utils::GeoPoint;
use crate::common::ProviderId;
use crate::domains::providers::models::PortfolioImage;
use crate::domains::services::models::Service;

/// Provider model - a user record carrying a business profile
///
/// Customers live in the same table; a record without `business_name` is not a
/// provider and never shows up in provider-facing reads.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,

    // Identity
    pub first_name: String,
    pub last_name: String,

    // Business profile
    pub business_name: Option<String>,
    pub business_description: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub service_areas: Vec<String>,

    // Reputation (maintained by the reviews service)
    pub rating: Option<f64>,
    pub total_reviews: i32,

    // Profile
    pub profile_picture_url: Option<String>,
    pub city: Option<String>,

    // Location
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub service_radius_km: i32,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Provider {
    /// "First Last", trimmed when either half is blank
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Active and has a business profile
    pub fn is_listed(&self) -> bool {
        self.is_active && self.business_name.is_some()
    }

    /// Coordinates, when both halves are set
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }

    /// No coordinates at all. Such providers pass every radius filter.
    pub fn has_no_location(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }

    /// Find provider by ID, returning None if not found
    pub async fn find_by_id_optional(id: &ProviderId, pool: &PgPool) -> Result<Option<Self>> {
        let provider = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(provider)
    }

    /// Distinct business names of active providers containing `term`, in id order
    pub async fn find_business_names_containing(
        term: &str,
        limit: usize,
        pool: &PgPool,
    ) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT business_name
            FROM users
            WHERE is_active = true
              AND business_name IS NOT NULL
              AND STRPOS(LOWER(business_name), LOWER($1)) > 0
            GROUP BY business_name
            ORDER BY MIN(id)
            LIMIT $2
            "#,
        )
        .bind(term)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(pool)
        .await?;
        Ok(names)
    }
}

/// Everything shown on a provider's public profile page
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub provider: Provider,
    /// All services, active or not
    pub services: Vec<Service>,
    /// Ordered by display order
    pub portfolio_images: Vec<PortfolioImage>,
}

impl ProviderProfile {
    /// Load a profile. Records without a business profile are treated as missing.
    pub async fn find_by_provider_id(id: &ProviderId, pool: &PgPool) -> Result<Option<Self>> {
        let Some(provider) = Provider::find_by_id_optional(id, pool).await? else {
            return Ok(None);
        };
        if provider.business_name.is_none() {
            return Ok(None);
        }

        let services = Service::find_by_provider(id, pool).await?;
        let portfolio_images = PortfolioImage::find_by_provider(id, pool).await?;

        Ok(Some(Self {
            provider,
            services,
            portfolio_images,
        }))
    }
}
