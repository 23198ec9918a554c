//! DTOs de los catálogos (marca, aseguradora, empresa de comunicación, EPS, ARL)

use serde::Deserialize;
use validator::Validate;

/// Request para crear un ítem de catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatalogItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

/// Request para actualizar un ítem de catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCatalogItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
}
