use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.name_empty",
            ),
            CatalogError::PriceMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.price_missing",
            ),
            CatalogError::PriceNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.price_not_positive",
            ),
            CatalogError::LocationEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.location_empty",
            ),
            CatalogError::ImageUrlInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.image_url_invalid",
            ),
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
