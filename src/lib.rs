//! Back office de administración de flota de transporte
//!
//! API REST sobre Axum y PostgreSQL: catálogos, empresas, propietarios,
//! conductores, vehículos, asignaciones conductor-vehículo (tarjeta de
//! control), registros de administración, usuarios, login y fotos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Json, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Tamaño máximo de una foto subida
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Arma el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let photos_dir = state.config.photos_dir();

    Router::new()
        .route("/", get(health))
        .nest("/make", routes::catalog_routes::create_catalog_router("makes", "Make"))
        .nest("/insurer", routes::catalog_routes::create_catalog_router("insurers", "Insurer"))
        .nest("/arl", routes::catalog_routes::create_catalog_router("arl", "ARL"))
        .nest("/eps", routes::catalog_routes::create_catalog_router("eps", "EPS"))
        .nest(
            "/communication-company",
            routes::catalog_routes::create_catalog_router(
                "communication_companies",
                "Communication company",
            ),
        )
        .nest("/company", routes::company_routes::create_company_router())
        .nest("/owner", routes::owner_routes::create_owner_router())
        .nest("/drivers", routes::driver_routes::create_driver_router())
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/driver-vehicles",
            routes::driver_vehicle_routes::create_driver_vehicle_router(),
        )
        .nest(
            "/administrations",
            routes::administration_routes::create_administration_router(),
        )
        .nest("/users", routes::user_routes::create_user_router())
        .nest("/auth", routes::auth_routes::create_auth_router())
        .nest(
            "/uploads",
            routes::upload_routes::create_upload_router()
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .nest_service("/photos", ServeDir::new(photos_dir))
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "fleet-admin",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
