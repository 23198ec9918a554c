//! DTOs de Company

use serde::Deserialize;
use validator::Validate;

use super::double_option;

/// Request para crear una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 30))]
    pub nit: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,
}

/// Request para actualizar una empresa. Las columnas anulables distinguen
/// ausente (conservar) de null (limpiar).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 30))]
    pub nit: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
}
