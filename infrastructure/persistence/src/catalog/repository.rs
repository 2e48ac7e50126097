use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::CatalogEntry;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::catalog::value_objects::NamePrefix;
use business::domain::errors::RepositoryError;

use super::entity::CatalogEntryEntity;

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<CatalogEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, CatalogEntryEntity>(
            "SELECT id, user_id, name, price, location, image_url, created_at FROM catalog_entries ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CatalogEntry, RepositoryError> {
        let entity = sqlx::query_as::<_, CatalogEntryEntity>(
            "SELECT id, user_id, name, price, location, image_url, created_at FROM catalog_entries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, entry: &CatalogEntry) -> Result<(), RepositoryError> {
        // Entries are append-only; no conflict clause on purpose.
        sqlx::query(
            r#"INSERT INTO catalog_entries (id, user_id, name, price, location, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(entry.id)
        .bind(entry.user_id.as_str())
        .bind(&entry.name)
        .bind(&entry.price)
        .bind(&entry.location)
        .bind(&entry.image_url)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn search_by_name_prefix(
        &self,
        prefix: &NamePrefix,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>, RepositoryError> {
        // Range scan over the folded-name index; the cap is applied here,
        // dedup happens in the use case.
        let entities = sqlx::query_as::<_, CatalogEntryEntity>(
            r#"SELECT id, user_id, name, price, location, image_url, created_at
            FROM catalog_entries
            WHERE lower(name) >= $1 AND lower(name) < $2
            ORDER BY lower(name) ASC
            LIMIT $3"#,
        )
        .bind(prefix.lower_bound())
        .bind(prefix.upper_bound())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
