use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::filter_by_name;
use crate::domain::catalog::model::CatalogEntry;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{
    ListCatalogEntriesParams, ListCatalogEntriesUseCase,
};
use crate::domain::logger::Logger;

pub struct ListCatalogEntriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCatalogEntriesUseCase for ListCatalogEntriesUseCaseImpl {
    async fn execute(
        &self,
        params: ListCatalogEntriesParams,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.logger.info("Fetching catalog entries");

        let entries = self.repository.get_all().await?;
        let entries = match params.search {
            Some(query) => filter_by_name(entries, &query),
            None => entries,
        };

        self.logger
            .info(&format!("Found {} catalog entries", entries.len()));
        Ok(entries)
    }
}
