//! Rutas de registros de administración
//!
//! Los filtros por rango de fechas y por vehículo van por POST con body,
//! como los consume el front.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::administration_controller::AdministrationController;
use crate::dto::administration_dto::{
    AdministrationResponse, CreateAdministrationRequest, DateRangeRequest, VehicleIdRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_administration_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_administrations))
        .route("/", post(create_administration))
        .route("/date-range", post(list_by_date_range))
        .route("/vehicle", post(list_by_vehicle))
}

async fn list_administrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdministrationResponse>>, AppError> {
    let controller = AdministrationController::new(state.pool.clone());
    let records = controller.list().await?;
    Ok(Json(records))
}

async fn create_administration(
    State(state): State<AppState>,
    Json(request): Json<CreateAdministrationRequest>,
) -> Result<Json<AdministrationResponse>, AppError> {
    let controller = AdministrationController::new(state.pool.clone());
    let record = controller.create(request).await?;
    Ok(Json(record))
}

async fn list_by_date_range(
    State(state): State<AppState>,
    Json(request): Json<DateRangeRequest>,
) -> Result<Json<Vec<AdministrationResponse>>, AppError> {
    let controller = AdministrationController::new(state.pool.clone());
    let records = controller.list_by_date_range(request).await?;
    Ok(Json(records))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleIdRequest>,
) -> Result<Json<Vec<AdministrationResponse>>, AppError> {
    let controller = AdministrationController::new(state.pool.clone());
    let records = controller.list_by_vehicle(request).await?;
    Ok(Json(records))
}
