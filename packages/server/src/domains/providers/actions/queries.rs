//! Provider query actions
//!
//! Query actions return data directly. Profiles are public, so there are no auth
//! checks here.

use anyhow::{Context, Result};
use tracing::info;

use crate::common::ProviderId;
use crate::domains::providers::data::ProviderProfileData;
use crate::kernel::ServerDeps;

/// Get a provider's public profile. `None` when the id is unknown or belongs to a
/// record without a business profile.
pub async fn get_provider_profile(
    provider_id: &str,
    deps: &ServerDeps,
) -> Result<Option<ProviderProfileData>> {
    let id = ProviderId::from(provider_id);

    info!(provider_id = %id, "Getting provider profile");

    let profile = deps
        .store
        .find_provider_profile(&id)
        .await
        .context("Failed to load provider profile")?;

    Ok(profile.map(ProviderProfileData::from))
}
