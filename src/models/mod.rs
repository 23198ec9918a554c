//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod administration;
pub mod catalog;
pub mod company;
pub mod driver;
pub mod driver_vehicle;
pub mod owner;
pub mod user;
pub mod vehicle;
