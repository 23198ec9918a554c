//! Repositorio de registros de administración

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::administration::{Administration, AdministrationDetailRow};
use crate::utils::errors::{map_db_constraint, AppError};

/// Columnas del JOIN con el vehículo; todo listado sale en orden contable
/// (fecha y luego id, ambos ascendentes).
const ADMINISTRATION_DETAIL_SQL: &str = r#"
    SELECT a.id, a.date, a.value, a.detail, a.payer, a.vehicle_id,
           v.plate AS vehicle_plate, v.model AS vehicle_model,
           v.internal_number AS vehicle_internal_number,
           v.mobile_number AS vehicle_mobile_number,
           v.make_id AS vehicle_make_id, v.insurer_id AS vehicle_insurer_id,
           v.communication_company_id AS vehicle_communication_company_id,
           v.owner_id AS vehicle_owner_id, v.company_id AS vehicle_company_id
    FROM administrations a
    INNER JOIN vehicles v ON v.id = a.vehicle_id
"#;

#[derive(Clone)]
pub struct AdministrationRepository {
    pool: PgPool,
}

impl AdministrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<AdministrationDetailRow>, AppError> {
        let rows = sqlx::query_as::<_, AdministrationDetailRow>(&format!(
            "{} ORDER BY a.date ASC, a.id ASC",
            ADMINISTRATION_DETAIL_SQL
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Rango de fechas inclusivo en ambos extremos.
    pub async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AdministrationDetailRow>, AppError> {
        let rows = sqlx::query_as::<_, AdministrationDetailRow>(&format!(
            "{} WHERE a.date BETWEEN $1 AND $2 ORDER BY a.date ASC, a.id ASC",
            ADMINISTRATION_DETAIL_SQL
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<AdministrationDetailRow>, AppError> {
        let rows = sqlx::query_as::<_, AdministrationDetailRow>(&format!(
            "{} WHERE a.vehicle_id = $1 ORDER BY a.date ASC, a.id ASC",
            ADMINISTRATION_DETAIL_SQL
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, record: &Administration) -> Result<Administration, AppError> {
        let created = sqlx::query_as::<_, Administration>(
            r#"
            INSERT INTO administrations (date, value, detail, payer, vehicle_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(record.date)
        .bind(record.value)
        .bind(&record.detail)
        .bind(&record.payer)
        .bind(record.vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(e, "Duplicate administration record", "Vehicle does not exist")
        })?;

        Ok(created)
    }
}
