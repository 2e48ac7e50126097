use async_trait::async_trait;

use crate::domain::vision::errors::VisionError;

pub struct SearchProductImagesParams {
    pub product_name: String,
}

#[async_trait]
pub trait SearchProductImagesUseCase: Send + Sync {
    /// Candidate image URLs for the product, at most three.
    async fn execute(&self, params: SearchProductImagesParams) -> Result<Vec<String>, VisionError>;
}
