//! Controller compartido por los cinco catálogos

use sqlx::PgPool;
use validator::Validate;

use crate::dto::catalog_dto::{CreateCatalogItemRequest, UpdateCatalogItemRequest};
use crate::models::catalog::CatalogItem;
use crate::repositories::catalog_repository::CatalogRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CatalogController {
    repository: CatalogRepository,
    resource: &'static str,
}

impl CatalogController {
    pub fn new(pool: PgPool, table: &'static str, resource: &'static str) -> Self {
        Self {
            repository: CatalogRepository::new(pool, table),
            resource,
        }
    }

    pub async fn list(&self) -> Result<Vec<CatalogItem>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CatalogItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(self.resource, id))
    }

    pub async fn create(&self, request: CreateCatalogItemRequest) -> Result<CatalogItem, AppError> {
        request.validate()?;

        if self.repository.name_exists(&request.name, None).await? {
            return Err(conflict_error(self.resource, "name", &request.name));
        }

        let item = self.repository.create(&request.name).await?;
        tracing::info!("📗 {} creado: {} (id {})", self.resource, item.name, item.id);
        Ok(item)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateCatalogItemRequest,
    ) -> Result<CatalogItem, AppError> {
        request.validate()?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(self.resource, id))?;

        let name = request.name.unwrap_or(existing.name);

        if self.repository.name_exists(&name, Some(id)).await? {
            return Err(conflict_error(self.resource, "name", &name));
        }

        self.repository.update(id, &name).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error(self.resource, id));
        }
        tracing::info!("🗑️ {} eliminado: id {}", self.resource, id);
        Ok(())
    }
}
