use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use super::errors::CatalogError;
use crate::domain::shared::value_objects::UserId;

/// A crowd-sourced price record: one sighting of a product at a price in a
/// store. Entries are append-only; there is no edit or delete flow.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub price: BigDecimal,
    pub location: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewCatalogEntryProps {
    pub user_id: UserId,
    pub name: String,
    pub price: Option<BigDecimal>,
    pub location: String,
    pub image_url: String,
}

impl CatalogEntry {
    pub fn new(props: NewCatalogEntryProps) -> Result<Self, CatalogError> {
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        let price = props.price.ok_or(CatalogError::PriceMissing)?;
        if price <= BigDecimal::from(0) {
            return Err(CatalogError::PriceNotPositive);
        }

        if props.location.trim().is_empty() {
            return Err(CatalogError::LocationEmpty);
        }

        Url::parse(&props.image_url).map_err(|_| CatalogError::ImageUrlInvalid)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name.trim().to_string(),
            price,
            location: props.location.trim().to_string(),
            image_url: props.image_url,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        price: BigDecimal,
        location: String,
        image_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            price,
            location,
            image_url,
            created_at,
        }
    }
}
