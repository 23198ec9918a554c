//! Definición de rutas HTTP

pub mod administration_routes;
pub mod auth_routes;
pub mod catalog_routes;
pub mod company_routes;
pub mod driver_routes;
pub mod driver_vehicle_routes;
pub mod owner_routes;
pub mod upload_routes;
pub mod user_routes;
pub mod vehicle_routes;
