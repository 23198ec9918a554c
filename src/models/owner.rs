//! Modelo de Owner (propietario de vehículo)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Propietario - mapea a la tabla `owners`, identificación única
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub identification: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: String,
}
