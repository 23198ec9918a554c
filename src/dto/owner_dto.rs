//! DTOs de Owner

use serde::Deserialize;
use validator::Validate;

use super::double_option;

/// Request para crear un propietario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(min = 1, max = 30))]
    pub identification: String,

    #[validate(email, length(max = 120))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,
}

/// Request para actualizar un propietario
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOwnerRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub identification: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,

    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
}
