//! Rutas de empresas

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::company::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies))
        .route("/", post(create_company))
        .route("/:id", get(get_company))
        .route("/:id", put(update_company))
        .route("/:id", delete(delete_company))
}

async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let companies = controller.list().await?;
    Ok(Json(companies))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.get_by_id(id).await?;
    Ok(Json(company))
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.create(request).await?;
    Ok(Json(company))
}

async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.update(id, request).await?;
    Ok(Json(company))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Company deleted successfully"
    })))
}
