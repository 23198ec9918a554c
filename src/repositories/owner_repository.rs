//! Repositorio de propietarios de vehículos

use sqlx::PgPool;

use crate::models::owner::Owner;
use crate::utils::errors::{map_db_constraint, AppError};

#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let owners = sqlx::query_as::<_, Owner>(
            "SELECT id, name, identification, email, address, phone FROM owners ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(owners)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            "SELECT id, name, identification, email, address, phone FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    pub async fn identification_exists(
        &self,
        identification: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM owners WHERE identification = $1 AND ($2::int IS NULL OR id <> $2))",
        )
        .bind(identification)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(&self, owner: &Owner) -> Result<Owner, AppError> {
        let created = sqlx::query_as::<_, Owner>(
            r#"
            INSERT INTO owners (name, identification, email, address, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, identification, email, address, phone
            "#,
        )
        .bind(&owner.name)
        .bind(&owner.identification)
        .bind(&owner.email)
        .bind(&owner.address)
        .bind(&owner.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Identification '{}' already exists", owner.identification),
                "Invalid reference",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, owner: &Owner) -> Result<Owner, AppError> {
        let updated = sqlx::query_as::<_, Owner>(
            r#"
            UPDATE owners
            SET name = $2, identification = $3, email = $4, address = $5, phone = $6
            WHERE id = $1
            RETURNING id, name, identification, email, address, phone
            "#,
        )
        .bind(owner.id)
        .bind(&owner.name)
        .bind(&owner.identification)
        .bind(&owner.email)
        .bind(&owner.address)
        .bind(&owner.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Identification '{}' already exists", owner.identification),
                "Invalid reference",
            )
        })?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
