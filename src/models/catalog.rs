//! Catálogos simples
//!
//! Marca, aseguradora, empresa de comunicación, EPS y ARL comparten la misma
//! forma: una tabla de consulta con nombre único.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de cualquier tabla de catálogo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
}

/// Referencia anidada `{id, name}` usada en las respuestas con relaciones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRef {
    pub id: i32,
    pub name: String,
}
