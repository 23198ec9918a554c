//! Modelo de Administration (registro de pagos de administración)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro contable de administración - mapea a la tabla `administrations`.
/// El valor siempre se guarda como entero.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Administration {
    pub id: i32,
    pub date: NaiveDate,
    pub value: i32,
    pub detail: String,
    pub payer: String,
    pub vehicle_id: i32,
}

/// Fila de administración con las columnas del vehículo relacionado (JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct AdministrationDetailRow {
    pub id: i32,
    pub date: NaiveDate,
    pub value: i32,
    pub detail: String,
    pub payer: String,
    pub vehicle_id: i32,
    pub vehicle_plate: String,
    pub vehicle_model: String,
    pub vehicle_internal_number: Option<String>,
    pub vehicle_mobile_number: Option<String>,
    pub vehicle_make_id: i32,
    pub vehicle_insurer_id: Option<i32>,
    pub vehicle_communication_company_id: Option<i32>,
    pub vehicle_owner_id: Option<i32>,
    pub vehicle_company_id: Option<i32>,
}
