//! Controller de uploads de fotos
//!
//! Guarda cada archivo bajo un nombre UUID (conservando la extensión
//! original) y sirve de barrera contra path traversal en el borrado.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use uuid::Uuid;

use crate::dto::upload_dto::{DeleteUploadResponse, UploadResponse};
use crate::utils::errors::AppError;

pub struct UploadController {
    photos_dir: PathBuf,
}

impl UploadController {
    pub fn new(photos_dir: PathBuf) -> Self {
        Self { photos_dir }
    }

    /// Guarda el campo multipart `file` bajo un nombre UUID
    pub async fn save_photo(&self, mut multipart: Multipart) -> Result<UploadResponse, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let original_name = field.file_name().map(|n| n.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Could not read file: {}", e)))?;

            if data.is_empty() {
                return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
            }

            let extension = original_name
                .as_deref()
                .and_then(|n| Path::new(n).extension())
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());

            let filename = match extension {
                Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
                None => Uuid::new_v4().to_string(),
            };

            tokio::fs::create_dir_all(&self.photos_dir)
                .await
                .map_err(|e| AppError::Internal(format!("Could not create uploads dir: {}", e)))?;

            tokio::fs::write(self.photos_dir.join(&filename), &data)
                .await
                .map_err(|e| AppError::Internal(format!("Could not write file: {}", e)))?;

            tracing::info!("📷 Foto guardada: {} ({} bytes)", filename, data.len());

            return Ok(UploadResponse {
                message: "File uploaded successfully".to_string(),
                path: format!("/photos/{}", filename),
                filename,
            });
        }

        Err(AppError::BadRequest("Missing 'file' field".to_string()))
    }

    /// Borra una foto por nombre; 404 si no existe
    pub async fn delete_photo(&self, filename: &str) -> Result<DeleteUploadResponse, AppError> {
        let name = sanitize_filename(filename)?;

        match tokio::fs::remove_file(self.photos_dir.join(name)).await {
            Ok(()) => {
                tracing::info!("🗑️ Foto eliminada: {}", name);
                Ok(DeleteUploadResponse {
                    message: "File deleted successfully".to_string(),
                    filename: name.to_string(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("File '{}' not found", name)))
            }
            Err(e) => Err(AppError::Internal(format!("Could not delete file: {}", e))),
        }
    }
}

/// Solo se aceptan nombres simples: sin separadores ni `..`
fn sanitize_filename(name: &str) -> Result<&str, AppError> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name == "."
    {
        return Err(AppError::BadRequest("Invalid filename".to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_accepts_plain_names() {
        assert!(sanitize_filename("abc-123.jpg").is_ok());
        assert!(sanitize_filename("f0e1d2c3.png").is_ok());
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert!(sanitize_filename("../secret").is_err());
        assert!(sanitize_filename("a/../../etc/passwd").is_err());
        assert!(sanitize_filename("dir/file.jpg").is_err());
        assert!(sanitize_filename("dir\\file.jpg").is_err());
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename(".").is_err());
    }
}
