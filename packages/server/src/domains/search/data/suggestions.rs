use serde::{Deserialize, Serialize};

/// Autocomplete lists, each in store order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionsData {
    pub services: Vec<String>,
    pub providers: Vec<String>,
    pub categories: Vec<String>,
}

impl SearchSuggestionsData {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.providers.is_empty() && self.categories.is_empty()
    }
}
