//! Repositorio de conductores

use sqlx::PgPool;

use crate::models::driver::{Driver, DriverDetailRow};
use crate::utils::errors::{map_db_constraint, AppError};

/// Columnas del JOIN con EPS y ARL
const DRIVER_DETAIL_SQL: &str = r#"
    SELECT d.id, d.identification, d.issued_in, d.first_name, d.last_name,
           d.phone, d.address, d.license, d.category, d.expires_on,
           d.blood_type, d.photo,
           d.eps_id, e.name AS eps_name,
           d.arl_id, a.name AS arl_name
    FROM drivers d
    INNER JOIN eps e ON e.id = d.eps_id
    INNER JOIN arl a ON a.id = d.arl_id
"#;

#[derive(Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    /// Búsqueda por prefijo de identificación (autocompletar),
    /// máximo 20 resultados.
    pub async fn search_by_identification(
        &self,
        term: &str,
    ) -> Result<Vec<DriverDetailRow>, AppError> {
        let drivers = sqlx::query_as::<_, DriverDetailRow>(&format!(
            r#"{}
            WHERE d.identification LIKE $1
            ORDER BY d.identification
            LIMIT 20
            "#,
            DRIVER_DETAIL_SQL
        ))
        .bind(format!("{}%", term))
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_detail_by_id(&self, id: i32) -> Result<Option<DriverDetailRow>, AppError> {
        let driver = sqlx::query_as::<_, DriverDetailRow>(&format!(
            "{} WHERE d.id = $1",
            DRIVER_DETAIL_SQL
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn identification_exists(
        &self,
        identification: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE identification = $1 AND ($2::int IS NULL OR id <> $2))",
        )
        .bind(identification)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM drivers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn create(&self, driver: &Driver) -> Result<Driver, AppError> {
        let created = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (identification, issued_in, first_name, last_name,
                                 phone, address, license, category, expires_on,
                                 blood_type, photo, eps_id, arl_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&driver.identification)
        .bind(&driver.issued_in)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.phone)
        .bind(&driver.address)
        .bind(&driver.license)
        .bind(&driver.category)
        .bind(driver.expires_on)
        .bind(&driver.blood_type)
        .bind(&driver.photo)
        .bind(driver.eps_id)
        .bind(driver.arl_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Identification '{}' already exists", driver.identification),
                "EPS or ARL does not exist",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, driver: &Driver) -> Result<Driver, AppError> {
        let updated = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET identification = $2, issued_in = $3, first_name = $4, last_name = $5,
                phone = $6, address = $7, license = $8, category = $9, expires_on = $10,
                blood_type = $11, photo = $12, eps_id = $13, arl_id = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(driver.id)
        .bind(&driver.identification)
        .bind(&driver.issued_in)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.phone)
        .bind(&driver.address)
        .bind(&driver.license)
        .bind(&driver.category)
        .bind(driver.expires_on)
        .bind(&driver.blood_type)
        .bind(&driver.photo)
        .bind(driver.eps_id)
        .bind(driver.arl_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Identification '{}' already exists", driver.identification),
                "EPS or ARL does not exist",
            )
        })?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
