use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogEntry;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_by_id::{
    GetCatalogEntryByIdParams, GetCatalogEntryByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCatalogEntryByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogEntryByIdUseCase for GetCatalogEntryByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetCatalogEntryByIdParams,
    ) -> Result<CatalogEntry, CatalogError> {
        self.logger
            .info(&format!("Fetching catalog entry by id: {}", params.id));

        let entry = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::NamePrefix;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CatalogEntry, RepositoryError>;
            async fn save(&self, entry: &CatalogEntry) -> Result<(), RepositoryError>;
            async fn search_by_name_prefix(
                &self,
                prefix: &NamePrefix,
                limit: usize,
            ) -> Result<Vec<CatalogEntry>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_entry_when_exists() {
        let entry_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockCatalogRepo::new();

        let id_clone = entry_id;
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == id_clone)
            .returning(move |_| {
                Ok(CatalogEntry::from_repository(
                    entry_id,
                    UserId::new("user-1"),
                    "Coca Cola 2L".to_string(),
                    BigDecimal::from(8),
                    "Mercado Central".to_string(),
                    "https://images.example.com/coca-cola-2l.jpg".to_string(),
                    now,
                ))
            });

        let use_case = GetCatalogEntryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCatalogEntryByIdParams { id: entry_id })
            .await;

        assert!(result.is_ok());
        let entry = result.unwrap();
        assert_eq!(entry.id, entry_id);
        assert_eq!(entry.name, "Coca Cola 2L");
    }

    #[tokio::test]
    async fn should_return_not_found_when_entry_absent() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCatalogEntryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCatalogEntryByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }

    #[tokio::test]
    async fn should_distinguish_store_failure_from_not_found() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetCatalogEntryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCatalogEntryByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::Repository(_)));
    }
}
