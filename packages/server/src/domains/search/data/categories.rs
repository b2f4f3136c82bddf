use serde::{Deserialize, Serialize};

use crate::common::CategoryId;
use crate::domains::search::models::CategoryStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub provider_count: usize,
    pub service_count: usize,
}

impl From<CategoryStats> for CategoryData {
    fn from(stats: CategoryStats) -> Self {
        Self {
            id: stats.category.id,
            name: stats.category.name,
            description: stats.category.description,
            icon: stats.category.icon,
            provider_count: stats.provider_count,
            service_count: stats.service_count,
        }
    }
}
