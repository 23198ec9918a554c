//! DTOs de User

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::Company;
use crate::models::user::{User, UserDetailRow};

use super::double_option;

/// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 120))]
    pub user: String,

    #[validate(length(min = 6, max = 120))]
    pub password: String,

    #[validate(length(min = 1, max = 60))]
    pub permissions: String,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(range(min = 1))]
    pub company_id: Option<i32>,
}

/// Request para actualizar un usuario. La contraseña, si viene,
/// se vuelve a hashear; la empresa acepta null para desvincular.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 120))]
    pub user: Option<String>,

    #[validate(length(min = 6, max = 120))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub permissions: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub company_id: Option<Option<i32>>,
}

/// Response de usuario: nunca incluye la contraseña
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub user: String,
    pub permissions: String,
    pub name: String,
    pub company: Option<Company>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user: user.user,
            permissions: user.permissions,
            name: user.name,
            company: None,
        }
    }
}

impl From<UserDetailRow> for UserResponse {
    fn from(row: UserDetailRow) -> Self {
        let company = row.company_id.map(|id| Company {
            id,
            nit: row.company_nit.unwrap_or_default(),
            name: row.company_name.unwrap_or_default(),
            phone: row.company_phone,
            address: row.company_address,
        });
        Self {
            id: row.id,
            user: row.user,
            permissions: row.permissions,
            name: row.name,
            company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_serializes_password() {
        let row = UserDetailRow {
            id: 1,
            user: "admin".to_string(),
            password: "$2b$12$hash".to_string(),
            permissions: "admin".to_string(),
            name: "Admin".to_string(),
            company_id: None,
            company_nit: None,
            company_name: None,
            company_phone: None,
            company_address: None,
        };
        let json = serde_json::to_value(UserResponse::from(row)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["user"], "admin");
    }
}
