use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::CatalogEntry;

#[derive(Debug, Clone, Object)]
pub struct CreateCatalogEntryRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Observed price as a decimal string, e.g. "8.49"
    pub price: String,
    /// Store name or location where the price was seen
    pub location: String,
    /// Absolute URL of the chosen product image
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CatalogEntryResponse {
    /// Entry unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Observed price as a decimal string
    pub price: String,
    /// Store name or location
    pub location: String,
    /// Product image URL
    pub image_url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name,
            price: entry.price.to_string(),
            location: entry.location,
            image_url: entry.image_url,
            created_at: entry.created_at,
        }
    }
}
