/// Endpoints of the two hosted image collaborators.
pub struct VisionConfig {
    pub recognition_url: String,
    pub image_search_url: String,
}

impl VisionConfig {
    pub fn from_env() -> Self {
        Self {
            recognition_url: std::env::var("VISION_RECOGNITION_URL")
                .expect("VISION_RECOGNITION_URL must be set"),
            image_search_url: std::env::var("VISION_IMAGE_SEARCH_URL")
                .expect("VISION_IMAGE_SEARCH_URL must be set"),
        }
    }
}
