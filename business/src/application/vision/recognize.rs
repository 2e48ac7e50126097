use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::vision::errors::VisionError;
use crate::domain::vision::services::ProductNameRecognizerService;
use crate::domain::vision::use_cases::recognize::{RecognizeProductParams, RecognizeProductUseCase};

pub struct RecognizeProductUseCaseImpl {
    pub recognizer: Arc<dyn ProductNameRecognizerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecognizeProductUseCase for RecognizeProductUseCaseImpl {
    async fn execute(&self, params: RecognizeProductParams) -> Result<Vec<String>, VisionError> {
        if params.image_base64.trim().is_empty() {
            return Err(VisionError::ImageEmpty);
        }

        self.logger.info("Recognizing product from image");

        let suggestions = self.recognizer.recognize(&params.image_base64).await?;

        // An empty list is a legitimate answer: the collaborator responded
        // but could not name the product.
        self.logger
            .info(&format!("Recognizer returned {} names", suggestions.len()));
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Recognizer {}

        #[async_trait]
        impl ProductNameRecognizerService for Recognizer {
            async fn recognize(&self, image_base64: &str) -> Result<Vec<String>, VisionError>;
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
    async fn should_return_suggested_names() {
        let mut mock_recognizer = MockRecognizer::new();
        mock_recognizer.expect_recognize().returning(|_| {
            Ok(vec![
                "Coca Cola 2L".to_string(),
                "Refrigerante Cola".to_string(),
            ])
        });

        let use_case = RecognizeProductUseCaseImpl {
            recognizer: Arc::new(mock_recognizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecognizeProductParams {
                image_base64: "aGVsbG8=".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn should_reject_empty_image_without_remote_call() {
        let mock_recognizer = MockRecognizer::new();

        let use_case = RecognizeProductUseCaseImpl {
            recognizer: Arc::new(mock_recognizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecognizeProductParams {
                image_base64: "".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), VisionError::ImageEmpty));
    }

    #[tokio::test]
    async fn should_pass_through_empty_answer_as_success() {
        let mut mock_recognizer = MockRecognizer::new();
        mock_recognizer.expect_recognize().returning(|_| Ok(vec![]));

        let use_case = RecognizeProductUseCaseImpl {
            recognizer: Arc::new(mock_recognizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecognizeProductParams {
                image_base64: "aGVsbG8=".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_return_error_when_recognizer_fails() {
        let mut mock_recognizer = MockRecognizer::new();
        mock_recognizer
            .expect_recognize()
            .returning(|_| Err(VisionError::RecognitionFailed));

        let use_case = RecognizeProductUseCaseImpl {
            recognizer: Arc::new(mock_recognizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecognizeProductParams {
                image_base64: "aGVsbG8=".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            VisionError::RecognitionFailed
        ));
    }
}
