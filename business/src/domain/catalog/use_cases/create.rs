use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogEntry;
use crate::domain::shared::value_objects::UserId;

pub struct CreateCatalogEntryParams {
    pub user_id: UserId,
    pub name: String,
    pub price: Option<BigDecimal>,
    pub location: String,
    pub image_url: String,
}

#[async_trait]
pub trait CreateCatalogEntryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCatalogEntryParams) -> Result<CatalogEntry, CatalogError>;
}
