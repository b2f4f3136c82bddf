use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::BaseMarketplaceStore;
use crate::server::app::AxumAppState;

const STORE_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: Health,
    pub database: StoreCheck,
}

#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreCheck {
    fn ok() -> Self {
        Self {
            status: "ok",
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            status: "error",
            error: Some(error),
        }
    }
}

async fn check_store(store: &dyn BaseMarketplaceStore) -> StoreCheck {
    match tokio::time::timeout(STORE_PING_TIMEOUT, store.ping()).await {
        Ok(Ok(())) => StoreCheck::ok(),
        Ok(Err(e)) => StoreCheck::failed(format!("Query failed: {}", e)),
        Err(_) => StoreCheck::failed(format!(
            "Query timeout (>{}s)",
            STORE_PING_TIMEOUT.as_secs()
        )),
    }
}

/// GET /health
///
/// 200 when the store answers a ping within 5s, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthReport>) {
    let database = check_store(state.deps.store.as_ref()).await;

    let (code, status) = match database.error {
        None => (StatusCode::OK, Health::Healthy),
        Some(ref error) => {
            tracing::warn!(%error, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Health::Unhealthy)
        }
    };

    (code, Json(HealthReport { status, database }))
}
