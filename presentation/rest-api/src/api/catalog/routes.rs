use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::create::{
    CreateCatalogEntryParams, CreateCatalogEntryUseCase,
};
use business::domain::catalog::use_cases::get_all::{
    ListCatalogEntriesParams, ListCatalogEntriesUseCase,
};
use business::domain::catalog::use_cases::get_by_id::{
    GetCatalogEntryByIdParams, GetCatalogEntryByIdUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::catalog::dto::{CatalogEntryResponse, CreateCatalogEntryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    create_use_case: Arc<dyn CreateCatalogEntryUseCase>,
    list_use_case: Arc<dyn ListCatalogEntriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCatalogEntryByIdUseCase>,
}

impl CatalogApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCatalogEntryUseCase>,
        list_use_case: Arc<dyn ListCatalogEntriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCatalogEntryByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
        }
    }
}

/// Catalog API
///
/// Endpoints for recording and browsing crowd-sourced price entries.
#[OpenApi]
impl CatalogApi {
    /// Record a price entry
    ///
    /// Appends a new catalog entry attributed to the authenticated user.
    #[oai(path = "/catalog", method = "post", tag = "ApiTags::Catalog")]
    async fn create_entry(
        &self,
        auth: SessionBearer,
        body: Json<CreateCatalogEntryRequest>,
    ) -> CreateCatalogEntryResponse {
        let price = match body.0.price.trim() {
            "" => None,
            raw => match BigDecimal::from_str(raw) {
                Ok(price) => Some(price),
                Err(_) => {
                    return CreateCatalogEntryResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "catalog.price_invalid".to_string(),
                    }));
                }
            },
        };

        let params = CreateCatalogEntryParams {
            user_id: UserId::new(auth.0.uid),
            name: body.0.name,
            price,
            location: body.0.location,
            image_url: body.0.image_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(entry) => CreateCatalogEntryResponse::Created(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCatalogEntryResponse::BadRequest(json),
                    _ => CreateCatalogEntryResponse::InternalError(json),
                }
            }
        }
    }

    /// List price entries
    ///
    /// Returns all catalog entries, newest first, optionally narrowed by a
    /// case-insensitive name search applied in memory.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn list_entries(
        &self,
        /// Live-search string; blank returns the full list
        search: Query<Option<String>>,
    ) -> ListCatalogEntriesResponse {
        match self
            .list_use_case
            .execute(ListCatalogEntriesParams { search: search.0 })
            .await
        {
            Ok(entries) => {
                let responses: Vec<CatalogEntryResponse> =
                    entries.into_iter().map(|e| e.into()).collect();
                ListCatalogEntriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCatalogEntriesResponse::InternalError(json)
            }
        }
    }

    /// Get a price entry by ID
    ///
    /// Returns a single catalog entry by its unique identifier.
    #[oai(path = "/catalog/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_entry_by_id(&self, id: Path<String>) -> GetCatalogEntryResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetCatalogEntryResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "catalog.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetCatalogEntryByIdParams { id: uuid })
            .await
        {
            Ok(entry) => GetCatalogEntryResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCatalogEntryResponse::NotFound(json),
                    _ => GetCatalogEntryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCatalogEntryResponse {
    #[oai(status = 201)]
    Created(Json<CatalogEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCatalogEntriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CatalogEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogEntryResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
