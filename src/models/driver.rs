//! Modelo de Driver (conductor)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Conductor - mapea a la tabla `drivers`, identificación única.
///
/// Las relaciones EPS y ARL son obligatorias; en las respuestas de la API de
/// conductores se exponen como escalares `epsId`/`arlId` (la vista de tarjeta
/// de control es la única que anida los objetos completos).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
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
    pub eps_id: i32,
    pub arl_id: i32,
}

/// Fila de conductor con los nombres de EPS/ARL cargados (JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct DriverDetailRow {
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
    pub eps_id: i32,
    pub eps_name: String,
    pub arl_id: i32,
    pub arl_name: String,
}

impl DriverDetailRow {
    pub fn into_driver(self) -> Driver {
        Driver {
            id: self.id,
            identification: self.identification,
            issued_in: self.issued_in,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address: self.address,
            license: self.license,
            category: self.category,
            expires_on: self.expires_on,
            blood_type: self.blood_type,
            photo: self.photo,
            eps_id: self.eps_id,
            arl_id: self.arl_id,
        }
    }
}
