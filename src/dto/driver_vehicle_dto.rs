//! DTOs de DriverVehicle (asignaciones / tarjeta de control)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::double_option;
use crate::models::catalog::CatalogRef;
use crate::models::company::Company;
use crate::models::driver::Driver;
use crate::models::driver_vehicle::{AssignmentDetailRow, AssignmentListRow, DriverVehicle};

/// Request de creación/actualización de asignación. El mismo payload sirve
/// para el upsert: si el par (conductor, vehículo) ya existe, los campos
/// presentes se fusionan sobre la fila existente; un `null` explícito
/// limpia el campo y un campo ausente conserva el valor guardado.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverVehicleRequest {
    #[validate(range(min = 1))]
    pub driver_id: i32,

    #[validate(range(min = 1))]
    pub vehicle_id: i32,

    #[serde(default, deserialize_with = "double_option")]
    pub permit_expires_on: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub soat: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub soat_expires: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub operation_card: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub operation_card_expires: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub contractual_expires: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub extra_contractual_expires: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub technical_mechanic_expires: Option<Option<NaiveDate>>,
}

impl CreateDriverVehicleRequest {
    /// Fusiona los campos presentes sobre una fila existente: campo ausente
    /// conserva el valor guardado, `null` explícito lo limpia.
    pub fn apply_to(&self, row: &mut DriverVehicle) {
        if let Some(v) = self.permit_expires_on {
            row.permit_expires_on = v;
        }
        if let Some(ref v) = self.note {
            row.note = v.clone();
        }
        if let Some(ref v) = self.soat {
            row.soat = v.clone();
        }
        if let Some(v) = self.soat_expires {
            row.soat_expires = v;
        }
        if let Some(ref v) = self.operation_card {
            row.operation_card = v.clone();
        }
        if let Some(v) = self.operation_card_expires {
            row.operation_card_expires = v;
        }
        if let Some(v) = self.contractual_expires {
            row.contractual_expires = v;
        }
        if let Some(v) = self.extra_contractual_expires {
            row.extra_contractual_expires = v;
        }
        if let Some(v) = self.technical_mechanic_expires {
            row.technical_mechanic_expires = v;
        }
    }

    /// Construye una fila nueva para el insert del upsert
    pub fn into_new_row(&self) -> DriverVehicle {
        let mut row = DriverVehicle {
            id: 0, // lo asigna la base
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            permit_expires_on: None,
            note: None,
            soat: None,
            soat_expires: None,
            operation_card: None,
            operation_card_expires: None,
            contractual_expires: None,
            extra_contractual_expires: None,
            technical_mechanic_expires: None,
        };
        self.apply_to(&mut row);
        row
    }
}

/// Query string del borrado por clave compuesta
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteByPairQuery {
    pub driver_id: i32,
    pub vehicle_id: i32,
}

/// Vehículo plano (columnas escalares) con su empresa anidada
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentVehicle {
    pub id: i32,
    pub plate: String,
    pub model: String,
    pub internal_number: Option<String>,
    pub mobile_number: Option<String>,
    pub make_id: i32,
    pub insurer_id: Option<i32>,
    pub communication_company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub company: Option<Company>,
}

/// Response de asignación para listados: conductor y vehículo
/// (con la empresa del vehículo) anidados.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverVehicleResponse {
    pub id: i32,
    pub permit_expires_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub soat: Option<String>,
    pub soat_expires: Option<NaiveDate>,
    pub operation_card: Option<String>,
    pub operation_card_expires: Option<NaiveDate>,
    pub contractual_expires: Option<NaiveDate>,
    pub extra_contractual_expires: Option<NaiveDate>,
    pub technical_mechanic_expires: Option<NaiveDate>,
    pub driver: Driver,
    pub vehicle: AssignmentVehicle,
}

impl From<AssignmentListRow> for DriverVehicleResponse {
    fn from(row: AssignmentListRow) -> Self {
        let company = row.vehicle_company_id.map(|id| Company {
            id,
            nit: row.company_nit.unwrap_or_default(),
            name: row.company_name.unwrap_or_default(),
            phone: row.company_phone,
            address: row.company_address,
        });

        Self {
            id: row.id,
            permit_expires_on: row.permit_expires_on,
            note: row.note,
            soat: row.soat,
            soat_expires: row.soat_expires_on,
            operation_card: row.operation_card,
            operation_card_expires: row.operation_card_expires_on,
            contractual_expires: row.contractual_expires_on,
            extra_contractual_expires: row.extra_contractual_expires_on,
            technical_mechanic_expires: row.technical_mechanic_expires_on,
            driver: Driver {
                id: row.driver_id,
                identification: row.driver_identification,
                issued_in: row.driver_issued_in,
                first_name: row.driver_first_name,
                last_name: row.driver_last_name,
                phone: row.driver_phone,
                address: row.driver_address,
                license: row.driver_license,
                category: row.driver_category,
                expires_on: row.driver_expires_on,
                blood_type: row.driver_blood_type,
                photo: row.driver_photo,
                eps_id: row.driver_eps_id,
                arl_id: row.driver_arl_id,
            },
            vehicle: AssignmentVehicle {
                id: row.vehicle_id,
                plate: row.vehicle_plate,
                model: row.vehicle_model,
                internal_number: row.vehicle_internal_number,
                mobile_number: row.vehicle_mobile_number,
                make_id: row.vehicle_make_id,
                insurer_id: row.vehicle_insurer_id,
                communication_company_id: row.vehicle_communication_company_id,
                owner_id: row.vehicle_owner_id,
                company,
            },
        }
    }
}

/// Conductor con EPS/ARL anidadas para la vista imprimible
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCardDriver {
    pub id: i32,
    pub identification: String,
    pub issued_in: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub license: String,
    pub category: String,
    pub expires_on: NaiveDate,
    pub blood_type: String,
    pub photo: String,
    pub eps: CatalogRef,
    pub arl: CatalogRef,
}

/// Vehículo con marca, aseguradora, empresa de comunicación y empresa
/// anidadas para la vista imprimible
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCardVehicle {
    pub id: i32,
    pub plate: String,
    pub model: String,
    pub internal_number: Option<String>,
    pub mobile_number: Option<String>,
    pub make: CatalogRef,
    pub insurer: Option<CatalogRef>,
    pub communication_company: Option<CatalogRef>,
    pub owner_id: Option<i32>,
    pub company: Option<Company>,
}

/// Response con el grafo completo para imprimir la tarjeta de control
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCardResponse {
    pub id: i32,
    pub permit_expires_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub soat: Option<String>,
    pub soat_expires: Option<NaiveDate>,
    pub operation_card: Option<String>,
    pub operation_card_expires: Option<NaiveDate>,
    pub contractual_expires: Option<NaiveDate>,
    pub extra_contractual_expires: Option<NaiveDate>,
    pub technical_mechanic_expires: Option<NaiveDate>,
    pub driver: ControlCardDriver,
    pub vehicle: ControlCardVehicle,
}

impl From<AssignmentDetailRow> for ControlCardResponse {
    fn from(row: AssignmentDetailRow) -> Self {
        let company = row.vehicle_company_id.map(|id| Company {
            id,
            nit: row.company_nit.unwrap_or_default(),
            name: row.company_name.unwrap_or_default(),
            phone: row.company_phone,
            address: row.company_address,
        });

        Self {
            id: row.id,
            permit_expires_on: row.permit_expires_on,
            note: row.note,
            soat: row.soat,
            soat_expires: row.soat_expires_on,
            operation_card: row.operation_card,
            operation_card_expires: row.operation_card_expires_on,
            contractual_expires: row.contractual_expires_on,
            extra_contractual_expires: row.extra_contractual_expires_on,
            technical_mechanic_expires: row.technical_mechanic_expires_on,
            driver: ControlCardDriver {
                id: row.driver_id,
                identification: row.driver_identification,
                issued_in: row.driver_issued_in,
                first_name: row.driver_first_name,
                last_name: row.driver_last_name,
                phone: row.driver_phone,
                address: row.driver_address,
                license: row.driver_license,
                category: row.driver_category,
                expires_on: row.driver_expires_on,
                blood_type: row.driver_blood_type,
                photo: row.driver_photo,
                eps: CatalogRef {
                    id: row.driver_eps_id,
                    name: row.driver_eps_name,
                },
                arl: CatalogRef {
                    id: row.driver_arl_id,
                    name: row.driver_arl_name,
                },
            },
            vehicle: ControlCardVehicle {
                id: row.vehicle_id,
                plate: row.vehicle_plate,
                model: row.vehicle_model,
                internal_number: row.vehicle_internal_number,
                mobile_number: row.vehicle_mobile_number,
                make: CatalogRef {
                    id: row.vehicle_make_id,
                    name: row.vehicle_make_name,
                },
                insurer: row
                    .vehicle_insurer_id
                    .zip(row.vehicle_insurer_name)
                    .map(|(id, name)| CatalogRef { id, name }),
                communication_company: row
                    .vehicle_communication_company_id
                    .zip(row.vehicle_communication_company_name)
                    .map(|(id, name)| CatalogRef { id, name }),
                owner_id: row.vehicle_owner_id,
                company,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_row() -> DriverVehicle {
        DriverVehicle {
            id: 1,
            driver_id: 10,
            vehicle_id: 20,
            permit_expires_on: None,
            note: Some("nota original".to_string()),
            soat: Some("SOAT-1".to_string()),
            soat_expires: NaiveDate::from_ymd_opt(2026, 1, 31),
            operation_card: None,
            operation_card_expires: None,
            contractual_expires: None,
            extra_contractual_expires: None,
            technical_mechanic_expires: None,
        }
    }

    #[test]
    fn test_apply_overwrites_present_fields() {
        let mut row = existing_row();
        let request: CreateDriverVehicleRequest = serde_json::from_str(
            r#"{"driverId": 10, "vehicleId": 20, "note": "nota nueva"}"#,
        )
        .unwrap();

        request.apply_to(&mut row);

        assert_eq!(row.note.as_deref(), Some("nota nueva"));
        // los campos ausentes conservan su valor
        assert_eq!(row.soat.as_deref(), Some("SOAT-1"));
        assert_eq!(row.soat_expires, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_apply_clears_field_on_explicit_null() {
        let mut row = existing_row();
        let request: CreateDriverVehicleRequest = serde_json::from_str(
            r#"{"driverId": 10, "vehicleId": 20, "note": null}"#,
        )
        .unwrap();

        request.apply_to(&mut row);

        // null explícito limpia, los demás campos quedan intactos
        assert_eq!(row.note, None);
        assert_eq!(row.soat.as_deref(), Some("SOAT-1"));
        assert_eq!(row.soat_expires, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_into_new_row_carries_pair_and_fields() {
        let request: CreateDriverVehicleRequest = serde_json::from_str(
            r#"{"driverId": 3, "vehicleId": 4, "soat": "S-9", "soatExpires": "2026-06-30"}"#,
        )
        .unwrap();

        let row = request.into_new_row();
        assert_eq!(row.driver_id, 3);
        assert_eq!(row.vehicle_id, 4);
        assert_eq!(row.soat.as_deref(), Some("S-9"));
        assert_eq!(row.soat_expires, NaiveDate::from_ymd_opt(2026, 6, 30));
        assert!(row.note.is_none());
    }
}
