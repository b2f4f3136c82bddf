use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CategoryId, ProviderId};

/// Catalog entry for a service category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceCategory {
    pub id: CategoryId,
    /// Unique, compared case-insensitively
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
}

impl ServiceCategory {
    /// Find categories ordered for display
    pub async fn find_all(active_only: bool, pool: &PgPool) -> Result<Vec<Self>> {
        let categories = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM service_categories
            WHERE ($1 = false OR is_active = true)
            ORDER BY display_order, id
            "#,
        )
        .bind(active_only)
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }

    /// Names of active categories containing `term`, in id order
    pub async fn find_names_containing(
        term: &str,
        limit: usize,
        pool: &PgPool,
    ) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM service_categories
            WHERE is_active = true
              AND STRPOS(LOWER(name), LOWER($1)) > 0
            ORDER BY id
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

/// One active service reduced to what category aggregation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryServiceRef {
    /// Free-text category as stored on the service
    pub category: String,
    pub provider_id: ProviderId,
    pub provider_active: bool,
}

impl CategoryServiceRef {
    /// Every active service with its owner's active flag
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let refs = sqlx::query_as::<_, Self>(
            r#"
            SELECT s.category, s.provider_id, u.is_active AS provider_active
            FROM services s
            JOIN users u ON u.id = s.provider_id
            WHERE s.is_active = true
            ORDER BY s.id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(refs)
    }
}
