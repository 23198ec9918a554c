//! Lógica de negocio
//!
//! Cada controller valida la entrada, coordina su repositorio y arma la
//! respuesta; los handlers HTTP quedan delgados.

pub mod administration_controller;
pub mod auth_controller;
pub mod catalog_controller;
pub mod company_controller;
pub mod driver_controller;
pub mod driver_vehicle_controller;
pub mod owner_controller;
pub mod upload_controller;
pub mod user_controller;
pub mod vehicle_controller;
