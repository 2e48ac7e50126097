use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::NameSuggestions;

pub struct LookupSuggestionsParams {
    /// Raw user-typed text; folding and the length precondition are the
    /// use case's concern.
    pub partial: String,
    pub limit: usize,
}

#[async_trait]
pub trait LookupSuggestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: LookupSuggestionsParams,
    ) -> Result<NameSuggestions, SuggestionError>;
}
