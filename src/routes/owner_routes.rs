//! Rutas de propietarios

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::owner_controller::OwnerController;
use crate::dto::owner_dto::{CreateOwnerRequest, UpdateOwnerRequest};
use crate::models::owner::Owner;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_owner_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_owners))
        .route("/", post(create_owner))
        .route("/:id", get(get_owner))
        .route("/:id", put(update_owner))
        .route("/:id", delete(delete_owner))
}

async fn list_owners(State(state): State<AppState>) -> Result<Json<Vec<Owner>>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owners = controller.list().await?;
    Ok(Json(owners))
}

async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Owner>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owner = controller.get_by_id(id).await?;
    Ok(Json(owner))
}

async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<Json<Owner>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owner = controller.create(request).await?;
    Ok(Json(owner))
}

async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateOwnerRequest>,
) -> Result<Json<Owner>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    let owner = controller.update(id, request).await?;
    Ok(Json(owner))
}

async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OwnerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Owner deleted successfully"
    })))
}
