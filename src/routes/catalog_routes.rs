//! Rutas de los catálogos
//!
//! Un solo constructor parametrizado arma el router CRUD de cada catálogo;
//! `main` lo monta cinco veces (marca, aseguradora, ARL, EPS y empresa
//! de comunicación).

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::{CreateCatalogItemRequest, UpdateCatalogItemRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router(table: &'static str, resource: &'static str) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move |State(state): State<AppState>| async move {
                let controller = CatalogController::new(state.pool.clone(), table, resource);
                let items = controller.list().await?;
                Ok::<_, AppError>(Json(items))
            })
            .post(
                move |State(state): State<AppState>,
                      Json(request): Json<CreateCatalogItemRequest>| async move {
                    let controller = CatalogController::new(state.pool.clone(), table, resource);
                    let item = controller.create(request).await?;
                    Ok::<_, AppError>(Json(item))
                },
            ),
        )
        .route(
            "/:id",
            get(move |State(state): State<AppState>, Path(id): Path<i32>| async move {
                let controller = CatalogController::new(state.pool.clone(), table, resource);
                let item = controller.get_by_id(id).await?;
                Ok::<_, AppError>(Json(item))
            })
            .put(
                move |State(state): State<AppState>,
                      Path(id): Path<i32>,
                      Json(request): Json<UpdateCatalogItemRequest>| async move {
                    let controller = CatalogController::new(state.pool.clone(), table, resource);
                    let item = controller.update(id, request).await?;
                    Ok::<_, AppError>(Json(item))
                },
            )
            .delete(
                move |State(state): State<AppState>, Path(id): Path<i32>| async move {
                    let controller = CatalogController::new(state.pool.clone(), table, resource);
                    controller.delete(id).await?;
                    Ok::<_, AppError>(Json(serde_json::json!({
                        "message": format!("{} deleted successfully", resource)
                    })))
                },
            ),
        )
}
