use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::suggestion::use_cases::lookup::{
    LookupSuggestionsParams, LookupSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::NameSuggestionsResponse;
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    lookup_use_case: Arc<dyn LookupSuggestionsUseCase>,
}

impl SuggestionApi {
    pub fn new(lookup_use_case: Arc<dyn LookupSuggestionsUseCase>) -> Self {
        Self { lookup_use_case }
    }
}

/// Suggestion API
///
/// Name autocomplete against the existing catalog, used while typing a
/// product name so near-identical entries can be reused.
#[OpenApi]
impl SuggestionApi {
    /// Look up name suggestions
    ///
    /// Returns up to `limit` deduplicated catalog names starting with the
    /// given text, in the store's ascending name order. Inputs shorter than
    /// two characters yield an empty list without touching the store.
    #[oai(
        path = "/catalog/name-suggestions",
        method = "get",
        tag = "ApiTags::Suggestions"
    )]
    async fn lookup(
        &self,
        /// User-typed partial product name
        partial: Query<String>,
        /// Maximum number of suggestions (default: 5)
        limit: Query<Option<usize>>,
    ) -> LookupSuggestionsResponse {
        let limit = limit.0.unwrap_or(5).min(10);

        match self
            .lookup_use_case
            .execute(LookupSuggestionsParams {
                partial: partial.0,
                limit,
            })
            .await
        {
            Ok(suggestions) => LookupSuggestionsResponse::Ok(Json(suggestions.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LookupSuggestionsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<NameSuggestionsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
