//! Rutas de uploads de fotos

use axum::{
    extract::{Multipart, Path, State},
    routing::{delete, post},
    Json, Router,
};

use crate::controllers::upload_controller::UploadController;
use crate::dto::upload_dto::{DeleteUploadResponse, UploadResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_upload_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_photo))
        .route("/:filename", delete(delete_photo))
}

async fn upload_photo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let controller = UploadController::new(state.config.photos_dir());
    let response = controller.save_photo(multipart).await?;
    Ok(Json(response))
}

async fn delete_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteUploadResponse>, AppError> {
    let controller = UploadController::new(state.config.photos_dir());
    let response = controller.delete_photo(&filename).await?;
    Ok(Json(response))
}
