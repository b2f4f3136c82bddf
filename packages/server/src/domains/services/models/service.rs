use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ProviderId, ServiceId};

/// Billing model of a service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceType {
    Hourly,
    Fixed,
    Quote,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Hourly => "Hourly",
            PriceType::Fixed => "Fixed",
            PriceType::Quote => "Quote",
        }
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceType {
    type Err = anyhow::Error;

    /// Case-insensitive, matching how stored price types are compared
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(PriceType::Hourly),
            "fixed" => Ok(PriceType::Fixed),
            "quote" => Ok(PriceType::Quote),
            _ => Err(anyhow::anyhow!("Invalid price type: {}", s)),
        }
    }
}

/// Service model - something a provider offers at a base price
///
/// `category` is a denormalized free-text label. It is matched against the
/// category catalog by lower-cased equality, never by key.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: ServiceId,
    pub provider_id: ProviderId,

    pub name: String,
    pub description: String,
    pub category: String,

    // Pricing
    pub base_price: Decimal,
    /// Stored as text, matched against [`PriceType`] case-insensitively
    pub price_type: String,
    pub estimated_duration_minutes: i32,

    pub is_active: bool,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Find all services of a provider, active or not
    pub async fn find_by_provider(provider_id: &ProviderId, pool: &PgPool) -> Result<Vec<Self>> {
        let services = sqlx::query_as::<_, Self>(
            "SELECT * FROM services WHERE provider_id = $1 ORDER BY id",
        )
        .bind(provider_id)
        .fetch_all(pool)
        .await?;
        Ok(services)
    }

    /// Distinct names of active services containing `term`, in id order
    pub async fn find_names_containing(
        term: &str,
        limit: usize,
        pool: &PgPool,
    ) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM services
            WHERE is_active = true
              AND STRPOS(LOWER(name), LOWER($1)) > 0
            GROUP BY name
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
