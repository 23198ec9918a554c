//! Modelo de DriverVehicle (asignación conductor-vehículo / tarjeta de control)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Asignación conductor-vehículo - mapea a la tabla `drivers_vehicles`.
///
/// Par `(driver_id, vehicle_id)` único; guarda los vencimientos de los
/// documentos de cumplimiento que alimentan la tarjeta de control imprimible.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DriverVehicle {
    pub id: i32,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub permit_expires_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub soat: Option<String>,
    #[sqlx(rename = "soat_expires_on")]
    pub soat_expires: Option<NaiveDate>,
    pub operation_card: Option<String>,
    #[sqlx(rename = "operation_card_expires_on")]
    pub operation_card_expires: Option<NaiveDate>,
    #[sqlx(rename = "contractual_expires_on")]
    pub contractual_expires: Option<NaiveDate>,
    #[sqlx(rename = "extra_contractual_expires_on")]
    pub extra_contractual_expires: Option<NaiveDate>,
    #[sqlx(rename = "technical_mechanic_expires_on")]
    pub technical_mechanic_expires: Option<NaiveDate>,
}

/// Fila de asignación con conductor, vehículo y empresa del vehículo (JOIN).
/// Los ids del conductor y el vehículo ya vienen en los campos `*_id`.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentListRow {
    // asignación
    pub id: i32,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub permit_expires_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub soat: Option<String>,
    pub soat_expires_on: Option<NaiveDate>,
    pub operation_card: Option<String>,
    pub operation_card_expires_on: Option<NaiveDate>,
    pub contractual_expires_on: Option<NaiveDate>,
    pub extra_contractual_expires_on: Option<NaiveDate>,
    pub technical_mechanic_expires_on: Option<NaiveDate>,
    // conductor
    pub driver_identification: String,
    pub driver_issued_in: String,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub driver_phone: String,
    pub driver_address: String,
    pub driver_license: String,
    pub driver_category: String,
    pub driver_expires_on: NaiveDate,
    pub driver_blood_type: String,
    pub driver_photo: String,
    pub driver_eps_id: i32,
    pub driver_arl_id: i32,
    // vehículo
    pub vehicle_plate: String,
    pub vehicle_model: String,
    pub vehicle_internal_number: Option<String>,
    pub vehicle_mobile_number: Option<String>,
    pub vehicle_make_id: i32,
    pub vehicle_insurer_id: Option<i32>,
    pub vehicle_communication_company_id: Option<i32>,
    pub vehicle_owner_id: Option<i32>,
    pub vehicle_company_id: Option<i32>,
    // empresa del vehículo
    pub company_nit: Option<String>,
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
}

/// Fila con el grafo completo para imprimir la tarjeta de control:
/// conductor con EPS/ARL y vehículo con marca, aseguradora,
/// empresa de comunicación y empresa.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentDetailRow {
    pub id: i32,
    pub driver_id: i32,
    pub vehicle_id: i32,
    pub permit_expires_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub soat: Option<String>,
    pub soat_expires_on: Option<NaiveDate>,
    pub operation_card: Option<String>,
    pub operation_card_expires_on: Option<NaiveDate>,
    pub contractual_expires_on: Option<NaiveDate>,
    pub extra_contractual_expires_on: Option<NaiveDate>,
    pub technical_mechanic_expires_on: Option<NaiveDate>,
    // conductor
    pub driver_identification: String,
    pub driver_issued_in: String,
    pub driver_first_name: String,
    pub driver_last_name: String,
    pub driver_phone: String,
    pub driver_address: String,
    pub driver_license: String,
    pub driver_category: String,
    pub driver_expires_on: NaiveDate,
    pub driver_blood_type: String,
    pub driver_photo: String,
    pub driver_eps_id: i32,
    pub driver_eps_name: String,
    pub driver_arl_id: i32,
    pub driver_arl_name: String,
    // vehículo
    pub vehicle_plate: String,
    pub vehicle_model: String,
    pub vehicle_internal_number: Option<String>,
    pub vehicle_mobile_number: Option<String>,
    pub vehicle_make_id: i32,
    pub vehicle_make_name: String,
    pub vehicle_insurer_id: Option<i32>,
    pub vehicle_insurer_name: Option<String>,
    pub vehicle_communication_company_id: Option<i32>,
    pub vehicle_communication_company_name: Option<String>,
    pub vehicle_owner_id: Option<i32>,
    pub vehicle_company_id: Option<i32>,
    // empresa del vehículo
    pub company_nit: Option<String>,
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
}
