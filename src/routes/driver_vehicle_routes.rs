//! Rutas de asignaciones conductor-vehículo
//!
//! Todas aceptan el header opcional `x-company-id` que limita la operación
//! a la empresa del vehículo. El borrado existe por id y por par.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::driver_vehicle_controller::DriverVehicleController;
use crate::dto::driver_vehicle_dto::{
    ControlCardResponse, CreateDriverVehicleRequest, DeleteByPairQuery, DriverVehicleResponse,
};
use crate::middleware::company_scope::CompanyScope;
use crate::models::driver_vehicle::DriverVehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments))
        .route("/", post(upsert_assignment))
        .route("/", delete(delete_assignment_by_pair))
        .route("/by-driver/:driver_id", get(list_by_driver))
        .route("/by-vehicle/:vehicle_id", get(list_by_vehicle))
        .route("/by-id/:id", get(get_control_card))
        .route("/:id", delete(delete_assignment))
}

async fn list_assignments(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
) -> Result<Json<Vec<DriverVehicleResponse>>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    let assignments = controller.list(scope).await?;
    Ok(Json(assignments))
}

async fn list_by_driver(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Path(driver_id): Path<i32>,
) -> Result<Json<Vec<DriverVehicleResponse>>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    let assignments = controller.list_by_driver(driver_id, scope).await?;
    Ok(Json(assignments))
}

async fn list_by_vehicle(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<Vec<DriverVehicleResponse>>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    let assignments = controller.list_by_vehicle(vehicle_id, scope).await?;
    Ok(Json(assignments))
}

async fn get_control_card(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Path(id): Path<i32>,
) -> Result<Json<ControlCardResponse>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    let card = controller.get_control_card(id, scope).await?;
    Ok(Json(card))
}

async fn upsert_assignment(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Json(request): Json<CreateDriverVehicleRequest>,
) -> Result<Json<DriverVehicle>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    let assignment = controller.upsert(scope, request).await?;
    Ok(Json(assignment))
}

async fn delete_assignment(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    controller.delete_by_id(id, scope).await?;
    Ok(Json(serde_json::json!({
        "message": "Assignment deleted successfully"
    })))
}

async fn delete_assignment_by_pair(
    State(state): State<AppState>,
    CompanyScope(scope): CompanyScope,
    Query(query): Query<DeleteByPairQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverVehicleController::new(state.pool.clone());
    controller.delete_by_pair(query, scope).await?;
    Ok(Json(serde_json::json!({
        "message": "Assignment deleted successfully"
    })))
}
