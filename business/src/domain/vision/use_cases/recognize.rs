use async_trait::async_trait;

use crate::domain::vision::errors::VisionError;

pub struct RecognizeProductParams {
    pub image_base64: String,
}

#[async_trait]
pub trait RecognizeProductUseCase: Send + Sync {
    /// Candidate product names for the photographed item, best first.
    async fn execute(&self, params: RecognizeProductParams) -> Result<Vec<String>, VisionError>;
}
