//! DTOs de entrada y salida de la API
//!
//! Requests validados con `validator` y responses con la forma JSON
//! (camelCase) que espera el front end.

pub mod administration_dto;
pub mod auth_dto;
pub mod catalog_dto;
pub mod company_dto;
pub mod driver_dto;
pub mod driver_vehicle_dto;
pub mod owner_dto;
pub mod upload_dto;
pub mod user_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Deserializer};

/// Deserializador para distinguir "campo ausente" de "campo en null".
///
/// En los PUT parciales un campo ausente conserva el valor actual y un `null`
/// explícito limpia la columna. Se usa con
/// `#[serde(default, deserialize_with = "double_option")]` sobre `Option<Option<T>>`:
/// ausente -> `None`, null -> `Some(None)`, valor -> `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        owner_id: Option<Option<i32>>,
    }

    #[test]
    fn test_absent_field() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p.owner_id, None);
    }

    #[test]
    fn test_null_field() {
        let p: Patch = serde_json::from_str(r#"{"owner_id": null}"#).unwrap();
        assert_eq!(p.owner_id, Some(None));
    }

    #[test]
    fn test_value_field() {
        let p: Patch = serde_json::from_str(r#"{"owner_id": 3}"#).unwrap();
        assert_eq!(p.owner_id, Some(Some(3)));
    }
}
