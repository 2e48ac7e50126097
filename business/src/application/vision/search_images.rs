use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::vision::errors::VisionError;
use crate::domain::vision::services::ImageSearchService;
use crate::domain::vision::use_cases::search_images::{
    SearchProductImagesParams, SearchProductImagesUseCase,
};

/// Screens show at most three candidate images per product.
const MAX_CANDIDATE_IMAGES: usize = 3;

pub struct SearchProductImagesUseCaseImpl {
    pub search: Arc<dyn ImageSearchService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductImagesUseCase for SearchProductImagesUseCaseImpl {
    async fn execute(
        &self,
        params: SearchProductImagesParams,
    ) -> Result<Vec<String>, VisionError> {
        if params.product_name.trim().is_empty() {
            return Err(VisionError::ProductNameEmpty);
        }

        self.logger.info(&format!(
            "Searching candidate images for: {}",
            params.product_name
        ));

        let mut urls = self.search.search(params.product_name.trim()).await?;
        urls.truncate(MAX_CANDIDATE_IMAGES);

        self.logger
            .info(&format!("Image search returned {} candidates", urls.len()));
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub ImageSearch {}

        #[async_trait]
        impl ImageSearchService for ImageSearch {
            async fn search(&self, product_name: &str) -> Result<Vec<String>, VisionError>;
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
    async fn should_truncate_results_to_three_urls() {
        let mut mock_search = MockImageSearch::new();
        mock_search.expect_search().returning(|_| {
            Ok(vec![
                "https://images.example.com/1.jpg".to_string(),
                "https://images.example.com/2.jpg".to_string(),
                "https://images.example.com/3.jpg".to_string(),
                "https://images.example.com/4.jpg".to_string(),
            ])
        });

        let use_case = SearchProductImagesUseCaseImpl {
            search: Arc::new(mock_search),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductImagesParams {
                product_name: "Coca Cola 2L".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "https://images.example.com/1.jpg");
    }

    #[tokio::test]
    async fn should_reject_blank_product_name_without_remote_call() {
        let mock_search = MockImageSearch::new();

        let use_case = SearchProductImagesUseCaseImpl {
            search: Arc::new(mock_search),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductImagesParams {
                product_name: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), VisionError::ProductNameEmpty));
    }

    #[tokio::test]
    async fn should_pass_through_empty_answer_as_success() {
        let mut mock_search = MockImageSearch::new();
        mock_search.expect_search().returning(|_| Ok(vec![]));

        let use_case = SearchProductImagesUseCaseImpl {
            search: Arc::new(mock_search),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductImagesParams {
                product_name: "Coca Cola 2L".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_return_error_when_search_fails() {
        let mut mock_search = MockImageSearch::new();
        mock_search
            .expect_search()
            .returning(|_| Err(VisionError::ImageSearchFailed));

        let use_case = SearchProductImagesUseCaseImpl {
            search: Arc::new(mock_search),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductImagesParams {
                product_name: "Coca Cola 2L".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            VisionError::ImageSearchFailed
        ));
    }
}
