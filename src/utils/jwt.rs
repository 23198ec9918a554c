//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para manejo de los tokens
//! de sesión que emite el login.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del token de sesión: id y nombre del usuario autenticado
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: i32,     // user id
    pub name: String, // display name
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para un usuario
pub fn generate_token(user_id: i32, name: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: user_id,
        name: name.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-no-usar-en-produccion".to_string(),
            expiration: 3600,
        }
    }

    fn decode_with(token: &str, secret: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    #[test]
    fn test_generated_token_carries_claims() {
        let config = test_config();
        let token = generate_token(7, "Admin", &config).unwrap();
        let claims = decode_with(&token, &config.secret).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.name, "Admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_fails() {
        let config = test_config();
        let token = generate_token(7, "Admin", &config).unwrap();

        assert!(decode_with(&token, "otro-secreto").is_err());
    }
}
