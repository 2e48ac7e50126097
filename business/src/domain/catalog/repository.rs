use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::CatalogEntry;
use super::value_objects::NamePrefix;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All entries, newest first.
    async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CatalogEntry, RepositoryError>;
    async fn save(&self, entry: &CatalogEntry) -> Result<(), RepositoryError>;
    /// Entries whose folded name falls in the prefix range, ascending by
    /// folded name, at most `limit` rows.
    async fn search_by_name_prefix(
        &self,
        prefix: &NamePrefix,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>, RepositoryError>;
}
