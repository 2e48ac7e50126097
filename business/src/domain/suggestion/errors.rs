#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.lookup_failed")]
    LookupFailed,
}
