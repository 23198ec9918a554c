//! DTOs de Administration (pagos de administración)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::administration::AdministrationDetailRow;
use crate::models::vehicle::Vehicle;

/// Request para crear un registro de administración.
///
/// `value` se recibe como número JSON y se trunca a entero al guardarlo
/// (comportamiento heredado del sistema anterior); debe ser positivo.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdministrationRequest {
    pub date: NaiveDate,

    pub value: f64,

    #[validate(length(min = 1))]
    pub detail: String,

    #[validate(length(min = 1, max = 120))]
    pub payer: String,

    #[validate(range(min = 1))]
    pub vehicle_id: i32,
}

impl CreateAdministrationRequest {
    /// Valor truncado (no redondeado) que se persiste
    pub fn truncated_value(&self) -> i32 {
        self.value.trunc() as i32
    }
}

/// Filtro por rango de fechas (bordes inclusivos)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Filtro por vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleIdRequest {
    #[validate(range(min = 1))]
    pub vehicle_id: i32,
}

/// Response de administración con el vehículo anidado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrationResponse {
    pub id: i32,
    pub date: NaiveDate,
    pub value: i32,
    pub detail: String,
    pub payer: String,
    pub vehicle: Vehicle,
}

impl From<AdministrationDetailRow> for AdministrationResponse {
    fn from(row: AdministrationDetailRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            value: row.value,
            detail: row.detail,
            payer: row.payer,
            vehicle: Vehicle {
                id: row.vehicle_id,
                plate: row.vehicle_plate,
                model: row.vehicle_model,
                internal_number: row.vehicle_internal_number,
                mobile_number: row.vehicle_mobile_number,
                make_id: row.vehicle_make_id,
                insurer_id: row.vehicle_insurer_id,
                communication_company_id: row.vehicle_communication_company_id,
                owner_id: row.vehicle_owner_id,
                company_id: row.vehicle_company_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_truncated_not_rounded() {
        let request: CreateAdministrationRequest = serde_json::from_str(
            r#"{"date": "2025-03-01", "value": 10.7, "detail": "cuota", "payer": "Juan", "vehicleId": 1}"#,
        )
        .unwrap();
        assert_eq!(request.truncated_value(), 10);
    }

    #[test]
    fn test_integer_value_passes_through() {
        let request: CreateAdministrationRequest = serde_json::from_str(
            r#"{"date": "2025-03-01", "value": 250000, "detail": "cuota", "payer": "Juan", "vehicleId": 1}"#,
        )
        .unwrap();
        assert_eq!(request.truncated_value(), 250000);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let result = serde_json::from_str::<CreateAdministrationRequest>(
            r#"{"date": "01/03/2025", "value": 10, "detail": "x", "payer": "y", "vehicleId": 1}"#,
        );
        assert!(result.is_err());
    }
}
