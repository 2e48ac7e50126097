use async_trait::async_trait;

use super::errors::VisionError;

/// Service port for the external image-recognition endpoint. An `Ok` with an
/// empty list means the collaborator answered but found nothing — distinct
/// from a failed call.
#[async_trait]
pub trait ProductNameRecognizerService: Send + Sync {
    async fn recognize(&self, image_base64: &str) -> Result<Vec<String>, VisionError>;
}

/// Service port for the external product-image search endpoint.
#[async_trait]
pub trait ImageSearchService: Send + Sync {
    async fn search(&self, product_name: &str) -> Result<Vec<String>, VisionError>;
}
