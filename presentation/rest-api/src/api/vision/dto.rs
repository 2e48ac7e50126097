use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Object)]
pub struct RecognizeProductRequest {
    /// Captured photo as base64 (with or without a data-URL prefix)
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecognizeProductResponse {
    /// Candidate product names, best first; empty when nothing was
    /// recognized (distinct from a failed call)
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SearchProductImagesRequest {
    /// Product name to find candidate images for
    pub product_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SearchProductImagesResponse {
    /// Candidate image URLs, at most three; empty when nothing was found
    pub image_urls: Vec<String>,
}
