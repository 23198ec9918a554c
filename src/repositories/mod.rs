//! Acceso a datos
//!
//! Un repositorio por entidad, todos sobre el mismo pool de PostgreSQL.

pub mod administration_repository;
pub mod catalog_repository;
pub mod company_repository;
pub mod driver_repository;
pub mod driver_vehicle_repository;
pub mod owner_repository;
pub mod user_repository;
pub mod vehicle_repository;
