//! Modelo de User (usuario del back office)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Usuario - mapea a la tabla `users`, login único.
/// La contraseña se guarda como hash bcrypt y nunca se serializa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub permissions: String,
    pub name: String,
    pub company_id: Option<i32>,
}

/// Fila de usuario con su empresa cargada (JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct UserDetailRow {
    pub id: i32,
    pub user: String,
    pub password: String,
    pub permissions: String,
    pub name: String,
    pub company_id: Option<i32>,
    pub company_nit: Option<String>,
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
}
