//! Repositorio de vehículos

use sqlx::PgPool;

use crate::models::vehicle::{Vehicle, VehicleDetailRow, VEHICLE_DETAIL_COLUMNS, VEHICLE_DETAIL_JOINS};
use crate::utils::errors::{map_db_constraint, AppError};

#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista con filtros opcionales: subcadena de placa y empresa.
    pub async fn find_all(
        &self,
        plate: Option<&str>,
        company_id: Option<i32>,
    ) -> Result<Vec<VehicleDetailRow>, AppError> {
        let pattern = plate.map(|p| format!("%{}%", p));
        let vehicles = sqlx::query_as::<_, VehicleDetailRow>(&format!(
            r#"
            SELECT {}
            {}
            WHERE ($1::text IS NULL OR v.plate LIKE $1)
              AND ($2::int IS NULL OR v.company_id = $2)
            ORDER BY v.id
            "#,
            VEHICLE_DETAIL_COLUMNS, VEHICLE_DETAIL_JOINS
        ))
        .bind(pattern)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_detail_by_id(&self, id: i32) -> Result<Option<VehicleDetailRow>, AppError> {
        let vehicle = sqlx::query_as::<_, VehicleDetailRow>(&format!(
            "SELECT {} {} WHERE v.id = $1",
            VEHICLE_DETAIL_COLUMNS, VEHICLE_DETAIL_JOINS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn plate_exists(&self, plate: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1 AND ($2::int IS NULL OR id <> $2))",
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (plate, model, internal_number, mobile_number,
                                  make_id, insurer_id, communication_company_id,
                                  owner_id, company_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&vehicle.plate)
        .bind(&vehicle.model)
        .bind(&vehicle.internal_number)
        .bind(&vehicle.mobile_number)
        .bind(vehicle.make_id)
        .bind(vehicle.insurer_id)
        .bind(vehicle.communication_company_id)
        .bind(vehicle.owner_id)
        .bind(vehicle.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Plate '{}' already exists", vehicle.plate),
                "Referenced catalog, owner or company does not exist",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = $2, model = $3, internal_number = $4, mobile_number = $5,
                make_id = $6, insurer_id = $7, communication_company_id = $8,
                owner_id = $9, company_id = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.plate)
        .bind(&vehicle.model)
        .bind(&vehicle.internal_number)
        .bind(&vehicle.mobile_number)
        .bind(vehicle.make_id)
        .bind(vehicle.insurer_id)
        .bind(vehicle.communication_company_id)
        .bind(vehicle.owner_id)
        .bind(vehicle.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("Plate '{}' already exists", vehicle.plate),
                "Referenced catalog, owner or company does not exist",
            )
        })?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
