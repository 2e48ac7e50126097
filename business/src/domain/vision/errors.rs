#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("vision.image_empty")]
    ImageEmpty,
    #[error("vision.product_name_empty")]
    ProductNameEmpty,
    #[error("vision.recognition_failed")]
    RecognitionFailed,
    #[error("vision.image_search_failed")]
    ImageSearchFailed,
}
