//! DTOs de uploads de archivos

use serde::Serialize;

/// Response al subir un archivo
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub path: String,
}

/// Response al eliminar un archivo
#[derive(Debug, Serialize)]
pub struct DeleteUploadResponse {
    pub message: String,
    pub filename: String,
}
