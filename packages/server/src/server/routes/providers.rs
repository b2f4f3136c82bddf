use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::providers::actions::get_provider_profile;
use crate::domains::providers::data::ProviderProfileData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// GET /api/providers/:id
pub async fn provider_profile_handler(
    Extension(state): Extension<AxumAppState>,
    Path(provider_id): Path<String>,
) -> Result<Json<ProviderProfileData>, ApiError> {
    get_provider_profile(&provider_id, &state.deps)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Provider not found".to_string()))
}
