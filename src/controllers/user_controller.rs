//! Controller de usuarios del back office

use sqlx::PgPool;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        Ok(UserResponse::from(user))
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self.repository.login_exists(&request.user, None).await? {
            return Err(conflict_error("User", "user", &request.user));
        }

        let password = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = User {
            id: 0, // lo asigna la base
            user: request.user,
            password,
            permissions: request.permissions,
            name: request.name,
            company_id: request.company_id,
        };

        let created = self.repository.create(&user).await?;
        tracing::info!("👥 Usuario creado: {} (id {})", created.user, created.id);

        self.get_by_id(created.id).await
    }

    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        let mut user = User {
            id: row.id,
            user: row.user,
            password: row.password,
            permissions: row.permissions,
            name: row.name,
            company_id: row.company_id,
        };

        if let Some(login) = request.user {
            if login != user.user && self.repository.login_exists(&login, Some(id)).await? {
                return Err(conflict_error("User", "user", &login));
            }
            user.user = login;
        }
        if let Some(password) = request.password {
            user.password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::Hash(e.to_string()))?;
        }
        if let Some(permissions) = request.permissions {
            user.permissions = permissions;
        }
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(company_id) = request.company_id {
            user.company_id = company_id;
        }

        self.repository.update(&user).await?;
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error("User", id));
        }
        tracing::info!("🗑️ Usuario eliminado: id {}", id);
        Ok(())
    }
}
