//! Modelo de Company (empresa transportadora)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Empresa - mapea a la tabla `companies`, NIT único
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub nit: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}
