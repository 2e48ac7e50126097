use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::suggestion::model::{NameSuggestions, SuggestionItem};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SuggestionItemResponse {
    /// Identifier of the catalog entry the name was taken from
    pub id: String,
    /// Existing product name
    pub name: String,
}

impl From<SuggestionItem> for SuggestionItemResponse {
    fn from(item: SuggestionItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct NameSuggestionsResponse {
    /// Folded input the lookup ran against; clients racing keystrokes
    /// compare this against their latest input and drop stale answers
    pub partial: String,
    /// Deduplicated matches in the store's ascending name order
    pub items: Vec<SuggestionItemResponse>,
}

impl From<NameSuggestions> for NameSuggestionsResponse {
    fn from(suggestions: NameSuggestions) -> Self {
        Self {
            partial: suggestions.partial,
            items: suggestions.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
