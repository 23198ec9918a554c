//! DTOs de Driver

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un conductor. EPS y ARL son obligatorias.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 30))]
    pub identification: String,

    #[validate(length(min = 1, max = 120))]
    pub issued_in: String,

    #[validate(length(min = 1, max = 120))]
    pub first_name: String,

    #[validate(length(min = 1, max = 120))]
    pub last_name: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(length(min = 1, max = 60))]
    pub license: String,

    #[validate(length(min = 1, max = 10))]
    pub category: String,

    pub expires_on: NaiveDate,

    #[validate(length(min = 1, max = 10))]
    pub blood_type: String,

    #[validate(length(min = 1, max = 500))]
    pub photo: String,

    #[validate(range(min = 1))]
    pub eps_id: i32,

    #[validate(range(min = 1))]
    pub arl_id: i32,
}

/// Request para actualizar un conductor. EPS/ARL no se pueden limpiar,
/// solo reemplazar.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 30))]
    pub identification: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub issued_in: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub license: Option<String>,

    #[validate(length(min = 1, max = 10))]
    pub category: Option<String>,

    pub expires_on: Option<NaiveDate>,

    #[validate(length(min = 1, max = 10))]
    pub blood_type: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub photo: Option<String>,

    #[validate(range(min = 1))]
    pub eps_id: Option<i32>,

    #[validate(range(min = 1))]
    pub arl_id: Option<i32>,
}

/// Query string del listado de conductores: con `identification` se activa
/// la búsqueda por prefijo (autocompletar).
#[derive(Debug, Deserialize)]
pub struct DriverQuery {
    pub identification: Option<String>,
}
