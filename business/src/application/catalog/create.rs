use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{CatalogEntry, NewCatalogEntryProps};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::create::{
    CreateCatalogEntryParams, CreateCatalogEntryUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateCatalogEntryUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCatalogEntryUseCase for CreateCatalogEntryUseCaseImpl {
    async fn execute(&self, params: CreateCatalogEntryParams) -> Result<CatalogEntry, CatalogError> {
        self.logger
            .info(&format!("Creating catalog entry: {}", params.name));

        // Validation happens here, before the repository is touched.
        let entry = CatalogEntry::new(NewCatalogEntryProps {
            user_id: params.user_id,
            name: params.name,
            price: params.price,
            location: params.location,
            image_url: params.image_url,
        })?;

        self.repository.save(&entry).await?;

        self.logger
            .info(&format!("Catalog entry created with id: {}", entry.id));
        Ok(entry)
    }
}
