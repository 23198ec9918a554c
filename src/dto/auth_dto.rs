//! DTOs de autenticación

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user_dto::UserResponse;

/// Credenciales de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 120))]
    pub user: String,

    #[validate(length(min = 1, max = 120))]
    pub password: String,
}

/// Response del login: usuario (sin contraseña) y token de sesión
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}
