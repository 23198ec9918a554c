//! Repositorio compartido por los catálogos
//!
//! Las cinco tablas de catálogo (makes, insurers, communication_companies,
//! eps, arl) tienen la misma forma, así que un solo repositorio
//! parametrizado por tabla las cubre todas.

use sqlx::PgPool;

use crate::models::catalog::CatalogItem;
use crate::utils::errors::{map_db_constraint, AppError};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
    table: &'static str,
}

impl CatalogRepository {
    /// `table` debe ser uno de los nombres de tabla de catálogo conocidos,
    /// nunca entrada del usuario.
    pub fn new(pool: PgPool, table: &'static str) -> Self {
        Self { pool, table }
    }

    pub async fn find_all(&self) -> Result<Vec<CatalogItem>, AppError> {
        let items = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT id, name FROM {} ORDER BY id",
            self.table
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CatalogItem>, AppError> {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT id, name FROM {} WHERE id = $1",
            self.table
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Verifica si el nombre ya existe, opcionalmente excluyendo un id
    /// (para updates).
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE name = $1 AND ($2::int IS NULL OR id <> $2))",
            self.table
        ))
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(&self, name: &str) -> Result<CatalogItem, AppError> {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            self.table
        ))
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Name '{}' already exists", name),
                "Invalid reference",
            )
        })?;

        Ok(item)
    }

    pub async fn update(&self, id: i32, name: &str) -> Result<CatalogItem, AppError> {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "UPDATE {} SET name = $2 WHERE id = $1 RETURNING id, name",
            self.table
        ))
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Name '{}' already exists", name),
                "Invalid reference",
            )
        })?;

        Ok(item)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", self.table))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
