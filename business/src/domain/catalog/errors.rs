#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.price_missing")]
    PriceMissing,
    #[error("catalog.price_not_positive")]
    PriceNotPositive,
    #[error("catalog.location_empty")]
    LocationEmpty,
    #[error("catalog.image_url_invalid")]
    ImageUrlInvalid,
    #[error("catalog.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
