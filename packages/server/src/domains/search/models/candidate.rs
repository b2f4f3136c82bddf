use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domains::providers::models::Provider;
use crate::domains::search::models::{ProviderCandidateFilter, ServiceCandidateFilter};
use crate::domains::services::models::Service;

/// A service that passed the candidate filter, with its provider
#[derive(Debug, Clone)]
pub struct ServiceCandidate {
    pub service: Service,
    pub provider: Provider,
}

/// Row shape for the service/provider join. Provider columns carry a prefix
/// because both tables share `id`, `is_active` and `created_at`.
#[derive(Debug, sqlx::FromRow)]
struct ServiceCandidateRow {
    #[sqlx(flatten)]
    service: Service,
    provider_first_name: String,
    provider_last_name: String,
    provider_business_name: Option<String>,
    provider_business_description: Option<String>,
    provider_hourly_rate: Option<Decimal>,
    provider_service_areas: Vec<String>,
    provider_rating: Option<f64>,
    provider_total_reviews: i32,
    provider_profile_picture_url: Option<String>,
    provider_city: Option<String>,
    provider_latitude: Option<f64>,
    provider_longitude: Option<f64>,
    provider_service_radius_km: i32,
    provider_is_active: bool,
    provider_created_at: DateTime<Utc>,
}

impl From<ServiceCandidateRow> for ServiceCandidate {
    fn from(row: ServiceCandidateRow) -> Self {
        let provider = Provider {
            id: row.service.provider_id.clone(),
            first_name: row.provider_first_name,
            last_name: row.provider_last_name,
            business_name: row.provider_business_name,
            business_description: row.provider_business_description,
            hourly_rate: row.provider_hourly_rate,
            service_areas: row.provider_service_areas,
            rating: row.provider_rating,
            total_reviews: row.provider_total_reviews,
            profile_picture_url: row.provider_profile_picture_url,
            city: row.provider_city,
            latitude: row.provider_latitude,
            longitude: row.provider_longitude,
            service_radius_km: row.provider_service_radius_km,
            is_active: row.provider_is_active,
            created_at: row.provider_created_at,
        };

        Self {
            service: row.service,
            provider,
        }
    }
}

impl ServiceCandidate {
    /// Load every service candidate in service id order
    pub async fn find_matching(filter: &ServiceCandidateFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let bounds = filter.bounds;

        let rows = sqlx::query_as::<_, ServiceCandidateRow>(
            r#"
            SELECT s.*,
                   u.first_name AS provider_first_name,
                   u.last_name AS provider_last_name,
                   u.business_name AS provider_business_name,
                   u.business_description AS provider_business_description,
                   u.hourly_rate AS provider_hourly_rate,
                   u.service_areas AS provider_service_areas,
                   u.rating AS provider_rating,
                   u.total_reviews AS provider_total_reviews,
                   u.profile_picture_url AS provider_profile_picture_url,
                   u.city AS provider_city,
                   u.latitude AS provider_latitude,
                   u.longitude AS provider_longitude,
                   u.service_radius_km AS provider_service_radius_km,
                   u.is_active AS provider_is_active,
                   u.created_at AS provider_created_at
            FROM services s
            INNER JOIN users u ON u.id = s.provider_id
            WHERE s.is_active = true
              AND u.is_active = true
              AND u.business_name IS NOT NULL
              AND ($1::text IS NULL
                   OR STRPOS(LOWER(s.name), LOWER($1)) > 0
                   OR STRPOS(LOWER(s.description), LOWER($1)) > 0
                   OR STRPOS(LOWER(s.category), LOWER($1)) > 0
                   OR STRPOS(LOWER(u.business_name), LOWER($1)) > 0)
              AND ($2::text IS NULL OR LOWER(s.category) = LOWER($2))
              AND ($3::numeric IS NULL OR s.base_price >= $3)
              AND ($4::numeric IS NULL OR s.base_price <= $4)
              AND ($5::text IS NULL OR LOWER(s.price_type) = LOWER($5))
              AND ($6::float8 IS NULL OR u.rating >= $6)
              AND ($7::float8 IS NULL
                   OR (u.latitude IS NULL AND u.longitude IS NULL)
                   OR (u.latitude BETWEEN $7 AND $8 AND u.longitude BETWEEN $9 AND $10))
            ORDER BY s.id
            "#,
        )
        .bind(filter.query.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.price_type.map(|kind| kind.as_str()))
        .bind(filter.min_rating)
        .bind(bounds.map(|b| b.min_lat))
        .bind(bounds.map(|b| b.max_lat))
        .bind(bounds.map(|b| b.min_lng))
        .bind(bounds.map(|b| b.max_lng))
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(ServiceCandidate::from).collect())
    }
}

/// A provider that passed the candidate filter, with the aggregates its result
/// row shows
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProviderCandidate {
    #[sqlx(flatten)]
    pub provider: Provider,
    /// Distinct categories of active services, first occurrence by service id
    pub categories: Vec<String>,
    pub active_service_count: i64,
    pub portfolio_image_count: i64,
}

impl ProviderCandidate {
    /// Load every provider candidate in provider id order
    pub async fn find_matching(filter: &ProviderCandidateFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let bounds = filter.bounds;

        let candidates = sqlx::query_as::<_, Self>(
            r#"
            SELECT u.*,
                   ARRAY(
                       SELECT s.category::text
                       FROM services s
                       WHERE s.provider_id = u.id AND s.is_active = true
                       GROUP BY s.category
                       ORDER BY MIN(s.id)
                   ) AS categories,
                   (SELECT COUNT(*) FROM services s
                    WHERE s.provider_id = u.id AND s.is_active = true) AS active_service_count,
                   (SELECT COUNT(*) FROM portfolio_images p
                    WHERE p.provider_id = u.id) AS portfolio_image_count
            FROM users u
            WHERE u.is_active = true
              AND u.business_name IS NOT NULL
              AND ($1::text IS NULL
                   OR STRPOS(LOWER(u.business_name), LOWER($1)) > 0
                   OR STRPOS(LOWER(COALESCE(u.business_description, '')), LOWER($1)) > 0
                   OR STRPOS(LOWER(u.first_name), LOWER($1)) > 0
                   OR STRPOS(LOWER(u.last_name), LOWER($1)) > 0
                   OR EXISTS (
                       SELECT 1 FROM services s
                       WHERE s.provider_id = u.id
                         AND s.is_active = true
                         AND STRPOS(LOWER(s.name), LOWER($1)) > 0))
              AND ($2::text IS NULL OR EXISTS (
                       SELECT 1 FROM services s
                       WHERE s.provider_id = u.id
                         AND s.is_active = true
                         AND LOWER(s.category) = LOWER($2)))
              AND ($3::text IS NULL OR STRPOS(LOWER(COALESCE(u.city, '')), LOWER($3)) > 0)
              AND ($4::text IS NULL OR EXISTS (
                       SELECT 1 FROM UNNEST(u.service_areas) AS area
                       WHERE STRPOS(LOWER(area), LOWER($4)) > 0))
              AND ($5::float8 IS NULL OR u.rating >= $5)
              AND ($6::float8 IS NULL
                   OR (u.latitude IS NULL AND u.longitude IS NULL)
                   OR (u.latitude BETWEEN $6 AND $7 AND u.longitude BETWEEN $8 AND $9))
            ORDER BY u.id
            "#,
        )
        .bind(filter.query.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.city.as_deref())
        .bind(filter.service_area.as_deref())
        .bind(filter.min_rating)
        .bind(bounds.map(|b| b.min_lat))
        .bind(bounds.map(|b| b.max_lat))
        .bind(bounds.map(|b| b.min_lng))
        .bind(bounds.map(|b| b.max_lng))
        .fetch_all(pool)
        .await?;

        Ok(candidates)
    }
}
