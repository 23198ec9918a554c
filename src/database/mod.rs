//! Módulo de base de datos
//!
//! Maneja la conexión a PostgreSQL y la sincronización del schema.

pub mod connection;
pub mod schema;

pub use connection::create_pool;
