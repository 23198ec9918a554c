//! Alcance por empresa vía header
//!
//! Las rutas de asignaciones aceptan un header `x-company-id` opcional que
//! restringe lecturas y escrituras a la empresa indicada. El valor se toma
//! tal cual llega; no se valida contra el token de sesión.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::utils::errors::AppError;

pub const COMPANY_HEADER: &str = "x-company-id";

/// `None` cuando el header no viene: sin restricción de empresa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyScope(pub Option<i32>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CompanyScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(COMPANY_HEADER) else {
            return Ok(CompanyScope(None));
        };

        let id = value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Invalid {} header", COMPANY_HEADER))
            })?;

        Ok(CompanyScope(Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<CompanyScope, AppError> {
        let (mut parts, _) = request.into_parts();
        CompanyScope::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_header_means_unscoped() {
        let request = Request::builder().uri("/").body(()).unwrap();
        assert_eq!(extract(request).await.unwrap(), CompanyScope(None));
    }

    #[tokio::test]
    async fn test_numeric_header_is_parsed() {
        let request = Request::builder()
            .uri("/")
            .header(COMPANY_HEADER, "42")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.unwrap(), CompanyScope(Some(42)));
    }

    #[tokio::test]
    async fn test_garbage_header_is_rejected() {
        let request = Request::builder()
            .uri("/")
            .header(COMPANY_HEADER, "abc")
            .body(())
            .unwrap();
        assert!(extract(request).await.is_err());
    }
}
