use anyhow::{Context, Result};
use tracing::debug;

use crate::domains::search::data::CategoryData;
use crate::domains::search::models::aggregate_category_stats;
use crate::kernel::ServerDeps;

/// List catalog categories with service and provider counts
pub async fn get_categories(active_only: bool, deps: &ServerDeps) -> Result<Vec<CategoryData>> {
    let categories = deps
        .store
        .find_categories(active_only)
        .await
        .context("Failed to load categories")?;
    let services = deps
        .store
        .find_active_service_categories()
        .await
        .context("Failed to load active service categories")?;

    debug!(
        active_only,
        categories = categories.len(),
        services = services.len(),
        "Aggregating category counts"
    );

    Ok(aggregate_category_stats(categories, &services)
        .into_iter()
        .map(CategoryData::from)
        .collect())
}
