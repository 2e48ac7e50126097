use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::vision::use_cases::recognize::{
    RecognizeProductParams, RecognizeProductUseCase,
};
use business::domain::vision::use_cases::search_images::{
    SearchProductImagesParams, SearchProductImagesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::vision::dto::{
    RecognizeProductRequest, RecognizeProductResponse, SearchProductImagesRequest,
    SearchProductImagesResponse,
};

pub struct VisionApi {
    recognize_use_case: Arc<dyn RecognizeProductUseCase>,
    search_images_use_case: Arc<dyn SearchProductImagesUseCase>,
}

impl VisionApi {
    pub fn new(
        recognize_use_case: Arc<dyn RecognizeProductUseCase>,
        search_images_use_case: Arc<dyn SearchProductImagesUseCase>,
    ) -> Self {
        Self {
            recognize_use_case,
            search_images_use_case,
        }
    }
}

/// Vision API
///
/// Thin pass-throughs to the hosted image-recognition and image-search
/// collaborators used by the capture flow.
#[OpenApi]
impl VisionApi {
    /// Recognize a product from a photo
    ///
    /// Returns AI-suggested product names for the captured image.
    #[oai(path = "/vision/recognize", method = "post", tag = "ApiTags::Vision")]
    async fn recognize(&self, body: Json<RecognizeProductRequest>) -> RecognizeResponse {
        match self
            .recognize_use_case
            .execute(RecognizeProductParams {
                image_base64: body.0.image_base64,
            })
            .await
        {
            Ok(suggestions) => RecognizeResponse::Ok(Json(RecognizeProductResponse { suggestions })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecognizeResponse::BadRequest(json),
                    _ => RecognizeResponse::UnprocessableEntity(json),
                }
            }
        }
    }

    /// Search candidate images for a product name
    ///
    /// Returns up to three image URLs for the given product name.
    #[oai(path = "/vision/image-search", method = "post", tag = "ApiTags::Vision")]
    async fn search_images(&self, body: Json<SearchProductImagesRequest>) -> ImageSearchResponse {
        match self
            .search_images_use_case
            .execute(SearchProductImagesParams {
                product_name: body.0.product_name,
            })
            .await
        {
            Ok(image_urls) => {
                ImageSearchResponse::Ok(Json(SearchProductImagesResponse { image_urls }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ImageSearchResponse::BadRequest(json),
                    _ => ImageSearchResponse::UnprocessableEntity(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecognizeResponse {
    #[oai(status = 200)]
    Ok(Json<RecognizeProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImageSearchResponse {
    #[oai(status = 200)]
    Ok(Json<SearchProductImagesResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}
