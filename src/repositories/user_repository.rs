//! Repositorio de usuarios del back office
//!
//! La columna `user` es palabra reservada en PostgreSQL, así que va
//! entre comillas en todas las consultas.

use sqlx::PgPool;

use crate::models::user::{User, UserDetailRow};
use crate::utils::errors::{map_db_constraint, AppError};

const USER_DETAIL_SQL: &str = r#"
    SELECT u.id, u."user", u.password, u.permissions, u.name, u.company_id,
           c.nit AS company_nit, c.name AS company_name,
           c.phone AS company_phone, c.address AS company_address
    FROM users u
    LEFT JOIN companies c ON c.id = u.company_id
"#;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<UserDetailRow>, AppError> {
        let users = sqlx::query_as::<_, UserDetailRow>(&format!(
            "{} ORDER BY u.id",
            USER_DETAIL_SQL
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserDetailRow>, AppError> {
        let user = sqlx::query_as::<_, UserDetailRow>(&format!(
            "{} WHERE u.id = $1",
            USER_DETAIL_SQL
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<UserDetailRow>, AppError> {
        let user = sqlx::query_as::<_, UserDetailRow>(&format!(
            r#"{} WHERE u."user" = $1"#,
            USER_DETAIL_SQL
        ))
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn login_exists(&self, login: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE "user" = $1 AND ($2::int IS NULL OR id <> $2))"#,
        )
        .bind(login)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create(&self, user: &User) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users ("user", password, permissions, name, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&user.user)
        .bind(&user.password)
        .bind(&user.permissions)
        .bind(&user.name)
        .bind(user.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("User '{}' already exists", user.user),
                "Company does not exist",
            )
        })?;

        Ok(created)
    }

    pub async fn update(&self, user: &User) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET "user" = $2, password = $3, permissions = $4, name = $5, company_id = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.user)
        .bind(&user.password)
        .bind(&user.permissions)
        .bind(&user.name)
        .bind(user.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_constraint(
                e,
                &format!("User '{}' already exists", user.user),
                "Company does not exist",
            )
        })?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
