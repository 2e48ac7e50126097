use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::CatalogEntry;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CatalogEntryEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub location: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntryEntity {
    pub fn into_domain(self) -> CatalogEntry {
        CatalogEntry::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.name,
            self.price,
            self.location,
            self.image_url,
            self.created_at,
        )
    }
}
