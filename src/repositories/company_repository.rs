//! Repositorio de empresas transportadoras

use sqlx::PgPool;

use crate::models::company::Company;
use crate::utils::errors::{map_db_constraint, AppError};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, nit, name, phone, address FROM companies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT id, nit, name, phone, address FROM companies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn nit_exists(&self, nit: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE nit = $1 AND ($2::int IS NULL OR id <> $2))",
        )
        .bind(nit)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(&self, company: &Company) -> Result<Company, AppError> {
        let created = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (nit, name, phone, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nit, name, phone, address
            "#,
        )
        .bind(&company.nit)
        .bind(&company.name)
        .bind(&company.phone)
        .bind(&company.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("NIT '{}' already exists", company.nit),
                "Invalid reference",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, company: &Company) -> Result<Company, AppError> {
        let updated = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET nit = $2, name = $3, phone = $4, address = $5
            WHERE id = $1
            RETURNING id, nit, name, phone, address
            "#,
        )
        .bind(company.id)
        .bind(&company.nit)
        .bind(&company.name)
        .bind(&company.phone)
        .bind(&company.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("NIT '{}' already exists", company.nit),
                "Invalid reference",
            )
        })?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
