//! Modelo de Vehicle (vehículo)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo - mapea a la tabla `vehicles`, placa única.
/// La marca es obligatoria; aseguradora, empresa de comunicación,
/// propietario y empresa son opcionales.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub plate: String,
    pub model: String,
    pub internal_number: Option<String>,
    pub mobile_number: Option<String>,
    pub make_id: i32,
    pub insurer_id: Option<i32>,
    pub communication_company_id: Option<i32>,
    pub owner_id: Option<i32>,
    pub company_id: Option<i32>,
}

/// Fila de vehículo con todas sus relaciones cargadas (JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct VehicleDetailRow {
    pub id: i32,
    pub plate: String,
    pub model: String,
    pub internal_number: Option<String>,
    pub mobile_number: Option<String>,
    pub make_id: i32,
    pub make_name: String,
    pub insurer_id: Option<i32>,
    pub insurer_name: Option<String>,
    pub communication_company_id: Option<i32>,
    pub communication_company_name: Option<String>,
    pub owner_id: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_identification: Option<String>,
    pub owner_email: Option<String>,
    pub owner_address: Option<String>,
    pub owner_phone: Option<String>,
    pub company_id: Option<i32>,
    pub company_nit: Option<String>,
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
}

/// Columnas con alias que comparten todas las consultas de detalle de vehículo
pub const VEHICLE_DETAIL_COLUMNS: &str = r#"
    v.id, v.plate, v.model, v.internal_number, v.mobile_number,
    v.make_id, m.name AS make_name,
    v.insurer_id, i.name AS insurer_name,
    v.communication_company_id, cc.name AS communication_company_name,
    v.owner_id, o.name AS owner_name, o.identification AS owner_identification,
    o.email AS owner_email, o.address AS owner_address, o.phone AS owner_phone,
    v.company_id, c.nit AS company_nit, c.name AS company_name,
    c.phone AS company_phone, c.address AS company_address
"#;

/// JOINs correspondientes a `VEHICLE_DETAIL_COLUMNS`
pub const VEHICLE_DETAIL_JOINS: &str = r#"
    FROM vehicles v
    INNER JOIN makes m ON m.id = v.make_id
    LEFT JOIN insurers i ON i.id = v.insurer_id
    LEFT JOIN communication_companies cc ON cc.id = v.communication_company_id
    LEFT JOIN owners o ON o.id = v.owner_id
    LEFT JOIN companies c ON c.id = v.company_id
"#;
