use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::value_objects::NamePrefix;
use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{NameSuggestions, SuggestionItem};
use crate::domain::suggestion::use_cases::lookup::{
    LookupSuggestionsParams, LookupSuggestionsUseCase,
};

pub struct LookupSuggestionsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupSuggestionsUseCase for LookupSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: LookupSuggestionsParams,
    ) -> Result<NameSuggestions, SuggestionError> {
        // Inputs below the minimum prefix length never reach the store.
        let Some(prefix) = NamePrefix::new(&params.partial) else {
            return Ok(NameSuggestions::empty(params.partial.trim().to_lowercase()));
        };

        self.logger.debug(&format!(
            "Looking up name suggestions for prefix: {}",
            prefix.lower_bound()
        ));

        let entries = self
            .repository
            .search_by_name_prefix(&prefix, params.limit)
            .await
            .map_err(|_| SuggestionError::LookupFailed)?;

        // The store caps at `limit`; dedup afterwards, first occurrence wins,
        // store order otherwise preserved.
        let mut items: Vec<SuggestionItem> = Vec::with_capacity(entries.len());
        for entry in entries {
            if items.iter().any(|item| item.name == entry.name) {
                continue;
            }
            items.push(SuggestionItem {
                id: entry.id,
                name: entry.name,
            });
        }

        self.logger
            .debug(&format!("Found {} name suggestions", items.len()));

        Ok(NameSuggestions {
            partial: prefix.lower_bound().to_string(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::CatalogEntry;
    use crate::domain::errors::RepositoryError;
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

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry::from_repository(
            Uuid::new_v4(),
            UserId::new("user-1"),
            name.to_string(),
            BigDecimal::from(8),
            "Mercado Central".to_string(),
            "https://images.example.com/item.jpg".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_skip_store_when_partial_shorter_than_two_chars() {
        // No expectation on search_by_name_prefix: any call would panic.
        let mock_repo = MockCatalogRepo::new();

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: " c ".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn should_return_entries_in_store_order() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_search_by_name_prefix()
            .withf(|prefix, limit| prefix.lower_bound() == "coca" && *limit == 5)
            .returning(|_, _| Ok(vec![entry("Coca Cola 2L"), entry("Coca Cola Zero")]));

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: "Coca".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Coca Cola 2L", "Coca Cola Zero"]);
    }

    #[tokio::test]
    async fn should_deduplicate_names_keeping_first_occurrence() {
        let first = entry("Coca Cola 2L");
        let first_id = first.id;
        let duplicate = entry("Coca Cola 2L");
        let other = entry("Coca Cola Zero");

        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_search_by_name_prefix()
            .returning(move |_, _| Ok(vec![first.clone(), duplicate.clone(), other.clone()]));

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: "coca".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].id, first_id);
        assert_eq!(result.items[0].name, "Coca Cola 2L");
        assert_eq!(result.items[1].name, "Coca Cola Zero");
    }

    #[tokio::test]
    async fn should_never_exceed_limit() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_search_by_name_prefix()
            .withf(|_, limit| *limit == 2)
            .returning(|_, _| Ok(vec![entry("Arroz Branco"), entry("Arroz Integral")]));

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: "arroz".to_string(),
                limit: 2,
            })
            .await
            .unwrap();

        assert!(result.items.len() <= 2);
    }

    #[tokio::test]
    async fn should_echo_folded_partial_for_stale_response_detection() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_search_by_name_prefix()
            .returning(|_, _| Ok(vec![]));

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: "  CoCa ".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        assert_eq!(result.partial, "coca");
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_search_by_name_prefix()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = LookupSuggestionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LookupSuggestionsParams {
                partial: "coca".to_string(),
                limit: 5,
            })
            .await;

        assert!(matches!(result.unwrap_err(), SuggestionError::LookupFailed));
    }
}
