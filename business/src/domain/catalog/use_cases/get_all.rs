use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogEntry;

pub struct ListCatalogEntriesParams {
    /// Optional live-search string applied in memory after the fetch.
    pub search: Option<String>,
}

#[async_trait]
pub trait ListCatalogEntriesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListCatalogEntriesParams,
    ) -> Result<Vec<CatalogEntry>, CatalogError>;
}
