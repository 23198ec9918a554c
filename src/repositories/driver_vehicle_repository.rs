//! Repositorio de asignaciones conductor-vehículo
//!
//! El alcance por empresa se resuelve aquí: toda consulta acepta un
//! `company_id` opcional que, cuando viene, filtra por la empresa del
//! vehículo de la asignación.

use sqlx::PgPool;

use crate::models::driver_vehicle::{AssignmentDetailRow, AssignmentListRow, DriverVehicle};
use crate::utils::errors::{map_db_constraint, AppError};

/// Columnas y JOINs de las vistas de lista (conductor + vehículo + empresa)
const ASSIGNMENT_LIST_SQL: &str = r#"
    SELECT dv.id, dv.driver_id, dv.vehicle_id, dv.permit_expires_on, dv.note,
           dv.soat, dv.soat_expires_on, dv.operation_card, dv.operation_card_expires_on,
           dv.contractual_expires_on, dv.extra_contractual_expires_on,
           dv.technical_mechanic_expires_on,
           d.identification AS driver_identification, d.issued_in AS driver_issued_in,
           d.first_name AS driver_first_name, d.last_name AS driver_last_name,
           d.phone AS driver_phone, d.address AS driver_address,
           d.license AS driver_license, d.category AS driver_category,
           d.expires_on AS driver_expires_on, d.blood_type AS driver_blood_type,
           d.photo AS driver_photo, d.eps_id AS driver_eps_id, d.arl_id AS driver_arl_id,
           v.plate AS vehicle_plate, v.model AS vehicle_model,
           v.internal_number AS vehicle_internal_number,
           v.mobile_number AS vehicle_mobile_number,
           v.make_id AS vehicle_make_id, v.insurer_id AS vehicle_insurer_id,
           v.communication_company_id AS vehicle_communication_company_id,
           v.owner_id AS vehicle_owner_id, v.company_id AS vehicle_company_id,
           c.nit AS company_nit, c.name AS company_name,
           c.phone AS company_phone, c.address AS company_address
    FROM drivers_vehicles dv
    INNER JOIN drivers d ON d.id = dv.driver_id
    INNER JOIN vehicles v ON v.id = dv.vehicle_id
    LEFT JOIN companies c ON c.id = v.company_id
"#;

/// Grafo completo para la tarjeta de control: agrega EPS/ARL del conductor
/// y marca, aseguradora y empresa de comunicación del vehículo.
const ASSIGNMENT_DETAIL_SQL: &str = r#"
    SELECT dv.id, dv.driver_id, dv.vehicle_id, dv.permit_expires_on, dv.note,
           dv.soat, dv.soat_expires_on, dv.operation_card, dv.operation_card_expires_on,
           dv.contractual_expires_on, dv.extra_contractual_expires_on,
           dv.technical_mechanic_expires_on,
           d.identification AS driver_identification, d.issued_in AS driver_issued_in,
           d.first_name AS driver_first_name, d.last_name AS driver_last_name,
           d.phone AS driver_phone, d.address AS driver_address,
           d.license AS driver_license, d.category AS driver_category,
           d.expires_on AS driver_expires_on, d.blood_type AS driver_blood_type,
           d.photo AS driver_photo,
           d.eps_id AS driver_eps_id, e.name AS driver_eps_name,
           d.arl_id AS driver_arl_id, a.name AS driver_arl_name,
           v.plate AS vehicle_plate, v.model AS vehicle_model,
           v.internal_number AS vehicle_internal_number,
           v.mobile_number AS vehicle_mobile_number,
           v.make_id AS vehicle_make_id, m.name AS vehicle_make_name,
           v.insurer_id AS vehicle_insurer_id, i.name AS vehicle_insurer_name,
           v.communication_company_id AS vehicle_communication_company_id,
           cc.name AS vehicle_communication_company_name,
           v.owner_id AS vehicle_owner_id, v.company_id AS vehicle_company_id,
           c.nit AS company_nit, c.name AS company_name,
           c.phone AS company_phone, c.address AS company_address
    FROM drivers_vehicles dv
    INNER JOIN drivers d ON d.id = dv.driver_id
    INNER JOIN eps e ON e.id = d.eps_id
    INNER JOIN arl a ON a.id = d.arl_id
    INNER JOIN vehicles v ON v.id = dv.vehicle_id
    INNER JOIN makes m ON m.id = v.make_id
    LEFT JOIN insurers i ON i.id = v.insurer_id
    LEFT JOIN communication_companies cc ON cc.id = v.communication_company_id
    LEFT JOIN companies c ON c.id = v.company_id
"#;

#[derive(Clone)]
pub struct DriverVehicleRepository {
    pool: PgPool,
}

impl DriverVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista filtrada: cualquier combinación de empresa, conductor y vehículo.
    pub async fn find_filtered(
        &self,
        company_id: Option<i32>,
        driver_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<Vec<AssignmentListRow>, AppError> {
        let rows = sqlx::query_as::<_, AssignmentListRow>(&format!(
            r#"{}
            WHERE ($1::int IS NULL OR v.company_id = $1)
              AND ($2::int IS NULL OR dv.driver_id = $2)
              AND ($3::int IS NULL OR dv.vehicle_id = $3)
            ORDER BY dv.id
            "#,
            ASSIGNMENT_LIST_SQL
        ))
        .bind(company_id)
        .bind(driver_id)
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Detalle de tarjeta de control, dentro del alcance de empresa si aplica.
    pub async fn find_detail(
        &self,
        id: i32,
        company_id: Option<i32>,
    ) -> Result<Option<AssignmentDetailRow>, AppError> {
        let row = sqlx::query_as::<_, AssignmentDetailRow>(&format!(
            "{} WHERE dv.id = $1 AND ($2::int IS NULL OR v.company_id = $2)",
            ASSIGNMENT_DETAIL_SQL
        ))
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Fila cruda por id, dentro del alcance de empresa si aplica.
    pub async fn find_row(
        &self,
        id: i32,
        company_id: Option<i32>,
    ) -> Result<Option<DriverVehicle>, AppError> {
        let row = sqlx::query_as::<_, DriverVehicle>(
            r#"
            SELECT dv.*
            FROM drivers_vehicles dv
            INNER JOIN vehicles v ON v.id = dv.vehicle_id
            WHERE dv.id = $1 AND ($2::int IS NULL OR v.company_id = $2)
            "#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Fila cruda por par (conductor, vehículo). Sobre este par se decide
    /// si un POST crea o fusiona.
    pub async fn find_by_pair(
        &self,
        driver_id: i32,
        vehicle_id: i32,
        company_id: Option<i32>,
    ) -> Result<Option<DriverVehicle>, AppError> {
        let row = sqlx::query_as::<_, DriverVehicle>(
            r#"
            SELECT dv.*
            FROM drivers_vehicles dv
            INNER JOIN vehicles v ON v.id = dv.vehicle_id
            WHERE dv.driver_id = $1 AND dv.vehicle_id = $2
              AND ($3::int IS NULL OR v.company_id = $3)
            "#,
        )
        .bind(driver_id)
        .bind(vehicle_id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert(&self, row: &DriverVehicle) -> Result<DriverVehicle, AppError> {
        let created = sqlx::query_as::<_, DriverVehicle>(
            r#"
            INSERT INTO drivers_vehicles
                (driver_id, vehicle_id, permit_expires_on, note, soat, soat_expires_on,
                 operation_card, operation_card_expires_on, contractual_expires_on,
                 extra_contractual_expires_on, technical_mechanic_expires_on)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(row.driver_id)
        .bind(row.vehicle_id)
        .bind(row.permit_expires_on)
        .bind(&row.note)
        .bind(&row.soat)
        .bind(row.soat_expires)
        .bind(&row.operation_card)
        .bind(row.operation_card_expires)
        .bind(row.contractual_expires)
        .bind(row.extra_contractual_expires)
        .bind(row.technical_mechanic_expires)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                "Assignment for this driver and vehicle already exists",
                "Driver or vehicle does not exist",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, row: &DriverVehicle) -> Result<DriverVehicle, AppError> {
        let updated = sqlx::query_as::<_, DriverVehicle>(
            r#"
            UPDATE drivers_vehicles
            SET permit_expires_on = $2, note = $3, soat = $4, soat_expires_on = $5,
                operation_card = $6, operation_card_expires_on = $7,
                contractual_expires_on = $8, extra_contractual_expires_on = $9,
                technical_mechanic_expires_on = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.permit_expires_on)
        .bind(&row.note)
        .bind(&row.soat)
        .bind(row.soat_expires)
        .bind(&row.operation_card)
        .bind(row.operation_card_expires)
        .bind(row.contractual_expires)
        .bind(row.extra_contractual_expires)
        .bind(row.technical_mechanic_expires)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM drivers_vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
