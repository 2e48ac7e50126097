use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::vision::errors::VisionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for VisionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            VisionError::ImageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "vision.image_empty",
            ),
            VisionError::ProductNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "vision.product_name_empty",
            ),
            VisionError::RecognitionFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RecognitionError",
                "vision.recognition_failed",
            ),
            VisionError::ImageSearchFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ImageSearchError",
                "vision.image_search_failed",
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
