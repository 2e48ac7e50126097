use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;

use identity::auth_provider::GoogleIdentityProvider;
use identity::client::IdentityClient;
use vision::client::VisionClient;
use vision::image_search::ImageSearchHttp;
use vision::recognizer::ProductNameRecognizerHttp;

use business::application::auth::get_profile::GetProfileUseCaseImpl;
use business::application::auth::sign_in::SignInUseCaseImpl;
use business::application::auth::sign_in_federated::FederatedSignInUseCaseImpl;
use business::application::auth::sign_out::SignOutUseCaseImpl;
use business::application::auth::sign_up::SignUpUseCaseImpl;
use business::application::catalog::create::CreateCatalogEntryUseCaseImpl;
use business::application::catalog::get_all::ListCatalogEntriesUseCaseImpl;
use business::application::catalog::get_by_id::GetCatalogEntryByIdUseCaseImpl;
use business::application::suggestion::lookup::LookupSuggestionsUseCaseImpl;
use business::application::vision::recognize::RecognizeProductUseCaseImpl;
use business::application::vision::search_images::SearchProductImagesUseCaseImpl;

use crate::config::identity_config::IdentityConfig;
use crate::config::vision_config::VisionConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
    pub vision_api: crate::api::vision::routes::VisionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool));

        let identity_config = IdentityConfig::from_env();
        let identity_client = IdentityClient::new(identity_config.api_key);
        let auth_provider = Arc::new(GoogleIdentityProvider::new(identity_client));

        let vision_config = VisionConfig::from_env();
        let recognizer_client = VisionClient::new(
            vision_config.recognition_url.clone(),
            vision_config.image_search_url.clone(),
        );
        let image_search_client = VisionClient::new(
            vision_config.recognition_url,
            vision_config.image_search_url,
        );
        let recognizer = Arc::new(ProductNameRecognizerHttp::new(recognizer_client));
        let image_search = Arc::new(ImageSearchHttp::new(image_search_client));

        // Catalog use cases
        let create_use_case = Arc::new(CreateCatalogEntryUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListCatalogEntriesUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetCatalogEntryByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Suggestion use case
        let lookup_use_case = Arc::new(LookupSuggestionsUseCaseImpl {
            repository: catalog_repository,
            logger: logger.clone(),
        });

        // Auth use cases
        let sign_in_use_case = Arc::new(SignInUseCaseImpl {
            provider: auth_provider.clone(),
            logger: logger.clone(),
        });
        let sign_up_use_case = Arc::new(SignUpUseCaseImpl {
            provider: auth_provider.clone(),
            logger: logger.clone(),
        });
        let federated_sign_in_use_case = Arc::new(FederatedSignInUseCaseImpl {
            provider: auth_provider.clone(),
            logger: logger.clone(),
        });
        let sign_out_use_case = Arc::new(SignOutUseCaseImpl {
            provider: auth_provider.clone(),
            logger: logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            provider: auth_provider,
            logger: logger.clone(),
        });

        // Vision use cases
        let recognize_use_case = Arc::new(RecognizeProductUseCaseImpl {
            recognizer,
            logger: logger.clone(),
        });
        let search_images_use_case = Arc::new(SearchProductImagesUseCaseImpl {
            search: image_search,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            sign_in_use_case,
            sign_up_use_case,
            federated_sign_in_use_case,
            sign_out_use_case,
            get_profile_use_case,
        );

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            create_use_case,
            list_use_case,
            get_by_id_use_case,
        );

        let suggestion_api = crate::api::suggestion::routes::SuggestionApi::new(lookup_use_case);

        let vision_api =
            crate::api::vision::routes::VisionApi::new(recognize_use_case, search_images_use_case);

        Ok(Self {
            health_api,
            auth_api,
            catalog_api,
            suggestion_api,
            vision_api,
        })
    }
}
