use anyhow::{Context, Result};
use tracing::debug;

use crate::domains::search::data::SearchSuggestionsData;
use crate::kernel::ServerDeps;

/// Suggestion list length used when the caller gives none or an invalid one
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Longest suggestion list a caller may request
pub const MAX_SUGGESTION_LIMIT: usize = 10;

/// Shortest term that produces suggestions
const MIN_TERM_CHARS: usize = 2;

/// Autocomplete over service names, business names and category names.
///
/// Blank or one-character terms return empty lists without touching the store.
pub async fn get_search_suggestions(
    term: &str,
    limit: usize,
    deps: &ServerDeps,
) -> Result<SearchSuggestionsData> {
    if term.trim().is_empty() || term.chars().count() < MIN_TERM_CHARS {
        return Ok(SearchSuggestionsData::default());
    }

    let services = deps
        .store
        .suggest_service_names(term, limit)
        .await
        .context("Failed to load service name suggestions")?;
    let providers = deps
        .store
        .suggest_business_names(term, limit)
        .await
        .context("Failed to load business name suggestions")?;
    let categories = deps
        .store
        .suggest_category_names(term, limit)
        .await
        .context("Failed to load category suggestions")?;

    debug!(
        term,
        services = services.len(),
        providers = providers.len(),
        categories = categories.len(),
        "Suggestions loaded"
    );

    Ok(SearchSuggestionsData {
        services,
        providers,
        categories,
    })
}
