use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{PortfolioImageId, ProviderId};

/// Portfolio image metadata. The files themselves live in external storage.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PortfolioImage {
    pub id: PortfolioImageId,
    pub provider_id: ProviderId,
    pub file_name: String,
    pub file_path: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl PortfolioImage {
    /// Public URL of the stored file
    pub fn image_url(&self) -> String {
        format!("/{}", self.file_path)
    }

    /// Find a provider's images in display order
    pub async fn find_by_provider(provider_id: &ProviderId, pool: &PgPool) -> Result<Vec<Self>> {
        let images = sqlx::query_as::<_, Self>(
            "SELECT * FROM portfolio_images WHERE provider_id = $1 ORDER BY display_order, id",
        )
        .bind(provider_id)
        .fetch_all(pool)
        .await?;
        Ok(images)
    }
}
