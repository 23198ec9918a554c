//! Controller de autenticación
//!
//! El login distingue usuario inexistente (404) de contraseña inválida
//! (403); el front usa esa diferencia para el mensaje que muestra.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::user_dto::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let row = self
            .repository
            .find_by_login(&request.user)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let valid = bcrypt::verify(&request.password, &row.password)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            return Err(AppError::Forbidden("Invalid password".to_string()));
        }

        let token = generate_token(row.id, &row.name, jwt_config)?;
        tracing::info!("🔑 Login exitoso: {} (id {})", row.user, row.id);

        Ok(LoginResponse {
            user: UserResponse::from(row),
            token,
        })
    }
}
