use reqwest::Client;

/// Shared HTTP client for the two hosted image endpoints. Both are opaque
/// collaborators reached by plain JSON POSTs.
pub struct VisionClient {
    pub client: Client,
    pub recognition_url: String,
    pub image_search_url: String,
}

impl VisionClient {
    pub fn new(recognition_url: String, image_search_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            recognition_url,
            image_search_url,
        }
    }
}
