use uuid::Uuid;

/// Projection of a catalog entry used only for name autocomplete; never
/// persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub id: Uuid,
    pub name: String,
}

/// One autocomplete answer. `partial` echoes the folded input the lookup
/// ran against so a caller racing fast keystrokes can drop answers that no
/// longer match its latest input.
#[derive(Debug, Clone)]
pub struct NameSuggestions {
    pub partial: String,
    pub items: Vec<SuggestionItem>,
}

impl NameSuggestions {
    pub fn empty(partial: impl Into<String>) -> Self {
        Self {
            partial: partial.into(),
            items: Vec::new(),
        }
    }
}
