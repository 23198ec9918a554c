//! DTOs de Vehicle

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::catalog::CatalogRef;
use crate::models::company::Company;
use crate::models::owner::Owner;
use crate::models::vehicle::VehicleDetailRow;

use super::double_option;

/// Request para crear un vehículo. La marca es obligatoria,
/// las demás relaciones son opcionales.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 15))]
    pub plate: String,

    #[validate(length(min = 1, max = 60))]
    pub model: String,

    #[validate(length(min = 1, max = 30))]
    pub internal_number: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub mobile_number: Option<String>,

    #[validate(range(min = 1))]
    pub make_id: i32,

    #[validate(range(min = 1))]
    pub insurer_id: Option<i32>,

    #[validate(range(min = 1))]
    pub communication_company_id: Option<i32>,

    #[validate(range(min = 1))]
    pub owner_id: Option<i32>,

    #[validate(range(min = 1))]
    pub company_id: Option<i32>,
}

/// Request para actualizar un vehículo. Campo ausente conserva el valor;
/// en columnas anulables un `null` explícito limpia la relación.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 15))]
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub internal_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub mobile_number: Option<Option<String>>,

    #[validate(range(min = 1))]
    pub make_id: Option<i32>,

    #[serde(default, deserialize_with = "double_option")]
    pub insurer_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub communication_company_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub owner_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub company_id: Option<Option<i32>>,
}

/// Query string del listado de vehículos
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuery {
    pub plate: Option<String>,
    pub company_id: Option<i32>,
}

/// Response de vehículo con sus relaciones anidadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i32,
    pub plate: String,
    pub model: String,
    pub internal_number: Option<String>,
    pub mobile_number: Option<String>,
    pub make: CatalogRef,
    pub insurer: Option<CatalogRef>,
    pub communication_company: Option<CatalogRef>,
    pub owner: Option<Owner>,
    pub company: Option<Company>,
}

impl From<VehicleDetailRow> for VehicleResponse {
    fn from(row: VehicleDetailRow) -> Self {
        let make = CatalogRef {
            id: row.make_id,
            name: row.make_name,
        };
        let insurer = row.insurer_id.zip(row.insurer_name).map(|(id, name)| CatalogRef { id, name });
        let communication_company = row
            .communication_company_id
            .zip(row.communication_company_name)
            .map(|(id, name)| CatalogRef { id, name });
        let owner = row.owner_id.map(|id| Owner {
            id,
            name: row.owner_name.unwrap_or_default(),
            identification: row.owner_identification.unwrap_or_default(),
            email: row.owner_email,
            address: row.owner_address,
            phone: row.owner_phone.unwrap_or_default(),
        });
        let company = row.company_id.map(|id| Company {
            id,
            nit: row.company_nit.unwrap_or_default(),
            name: row.company_name.unwrap_or_default(),
            phone: row.company_phone,
            address: row.company_address,
        });

        Self {
            id: row.id,
            plate: row.plate,
            model: row.model,
            internal_number: row.internal_number,
            mobile_number: row.mobile_number,
            make,
            insurer,
            communication_company,
            owner,
            company,
        }
    }
}
