use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogEntry;

pub struct GetCatalogEntryByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCatalogEntryByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCatalogEntryByIdParams) -> Result<CatalogEntry, CatalogError>;
}
