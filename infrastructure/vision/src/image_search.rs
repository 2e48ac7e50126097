use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::vision::errors::VisionError;
use business::domain::vision::services::ImageSearchService;

use crate::client::VisionClient;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageSearchResponse {
    image_urls: Vec<String>,
}

/// Adapter for the hosted product-image search endpoint:
/// POST { "productName": ... } -> { "imageUrls": [url, ...] }.
pub struct ImageSearchHttp {
    client: VisionClient,
}

impl ImageSearchHttp {
    pub fn new(client: VisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSearchService for ImageSearchHttp {
    async fn search(&self, product_name: &str) -> Result<Vec<String>, VisionError> {
        let body = json!({ "productName": product_name });

        let response = self
            .client
            .client
            .post(&self.client.image_search_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| VisionError::ImageSearchFailed)?;

        if !response.status().is_success() {
            return Err(VisionError::ImageSearchFailed);
        }

        let data: ImageSearchResponse = response
            .json()
            .await
            .map_err(|_| VisionError::ImageSearchFailed)?;

        Ok(data.image_urls)
    }
}
