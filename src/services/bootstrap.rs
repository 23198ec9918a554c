//! Datos iniciales
//!
//! Con la tabla de usuarios vacía no habría forma de entrar al sistema,
//! así que el arranque siembra una cuenta de prueba.

use sqlx::PgPool;

use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

const DEFAULT_LOGIN: &str = "testuser_2025";
const DEFAULT_PASSWORD: &str = "password123";

/// Si no existe ningún usuario, crea la cuenta de prueba con la
/// contraseña hasheada con bcrypt.
pub async fn seed_default_user(pool: &PgPool) -> Result<(), AppError> {
    let repository = UserRepository::new(pool.clone());

    if repository.count().await? > 0 {
        return Ok(());
    }

    let password = bcrypt::hash(DEFAULT_PASSWORD, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Hash(e.to_string()))?;

    let user = User {
        id: 0, // lo asigna la base
        user: DEFAULT_LOGIN.to_string(),
        password,
        permissions: "user".to_string(),
        name: "Test User".to_string(),
        company_id: None,
    };

    let created = repository.create(&user).await?;
    tracing::info!("🌱 Usuario inicial creado: {} (id {})", created.user, created.id);
    Ok(())
}
