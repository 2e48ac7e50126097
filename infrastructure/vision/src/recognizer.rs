use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::vision::errors::VisionError;
use business::domain::vision::services::ProductNameRecognizerService;

use crate::client::VisionClient;

#[derive(Deserialize)]
struct RecognitionResponse {
    suggestions: Vec<String>,
}

/// Adapter for the hosted image-recognition endpoint:
/// POST { "imageBase64": ... } -> { "suggestions": [name, ...] }.
pub struct ProductNameRecognizerHttp {
    client: VisionClient,
}

impl ProductNameRecognizerHttp {
    pub fn new(client: VisionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductNameRecognizerService for ProductNameRecognizerHttp {
    async fn recognize(&self, image_base64: &str) -> Result<Vec<String>, VisionError> {
        let body = json!({ "imageBase64": image_base64 });

        let response = self
            .client
            .client
            .post(&self.client.recognition_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| VisionError::RecognitionFailed)?;

        if !response.status().is_success() {
            return Err(VisionError::RecognitionFailed);
        }

        // A malformed body is a failed call; an empty `suggestions` array is
        // a valid "nothing recognized" answer.
        let data: RecognitionResponse = response
            .json()
            .await
            .map_err(|_| VisionError::RecognitionFailed)?;

        Ok(data.suggestions)
    }
}
