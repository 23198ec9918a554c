//! Controller de asignaciones conductor-vehículo
//!
//! El POST hace upsert por par (conductor, vehículo): si la asignación ya
//! existe, los campos presentes del payload se fusionan sobre la fila
//! guardada. La lectura y el write van en dos pasos separados; dos POST
//! simultáneos sobre un par nuevo pueden chocar contra el índice único y
//! el segundo termina en 409.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::driver_vehicle_dto::{
    ControlCardResponse, CreateDriverVehicleRequest, DeleteByPairQuery, DriverVehicleResponse,
};
use crate::models::driver_vehicle::DriverVehicle;
use crate::models::vehicle::Vehicle;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::driver_vehicle_repository::DriverVehicleRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct DriverVehicleController {
    repository: DriverVehicleRepository,
    driver_repository: DriverRepository,
    vehicle_repository: VehicleRepository,
}

impl DriverVehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverVehicleRepository::new(pool.clone()),
            driver_repository: DriverRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, scope: Option<i32>) -> Result<Vec<DriverVehicleResponse>, AppError> {
        let rows = self.repository.find_filtered(scope, None, None).await?;
        Ok(rows.into_iter().map(DriverVehicleResponse::from).collect())
    }

    pub async fn list_by_driver(
        &self,
        driver_id: i32,
        scope: Option<i32>,
    ) -> Result<Vec<DriverVehicleResponse>, AppError> {
        let rows = self
            .repository
            .find_filtered(scope, Some(driver_id), None)
            .await?;
        Ok(rows.into_iter().map(DriverVehicleResponse::from).collect())
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: i32,
        scope: Option<i32>,
    ) -> Result<Vec<DriverVehicleResponse>, AppError> {
        let rows = self
            .repository
            .find_filtered(scope, None, Some(vehicle_id))
            .await?;
        Ok(rows.into_iter().map(DriverVehicleResponse::from).collect())
    }

    /// Grafo completo para imprimir la tarjeta de control
    pub async fn get_control_card(
        &self,
        id: i32,
        scope: Option<i32>,
    ) -> Result<ControlCardResponse, AppError> {
        let row = self
            .repository
            .find_detail(id, scope)
            .await?
            .ok_or_else(|| not_found_error("Assignment", id))?;

        Ok(ControlCardResponse::from(row))
    }

    /// Upsert por par: crea la asignación o fusiona los campos presentes
    /// sobre la existente.
    pub async fn upsert(
        &self,
        scope: Option<i32>,
        request: CreateDriverVehicleRequest,
    ) -> Result<DriverVehicle, AppError> {
        request.validate()?;

        if !self.driver_repository.exists(request.driver_id).await? {
            return Err(not_found_error("Driver", request.driver_id));
        }

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        ensure_vehicle_in_scope(&vehicle, scope)?;

        match self
            .repository
            .find_by_pair(request.driver_id, request.vehicle_id, None)
            .await?
        {
            Some(mut existing) => {
                request.apply_to(&mut existing);
                let updated = self.repository.update(&existing).await?;
                tracing::info!(
                    "🔄 Asignación fusionada: conductor {} / vehículo {} (id {})",
                    updated.driver_id,
                    updated.vehicle_id,
                    updated.id
                );
                Ok(updated)
            }
            None => {
                let created = self.repository.insert(&request.into_new_row()).await?;
                tracing::info!(
                    "🪪 Asignación creada: conductor {} / vehículo {} (id {})",
                    created.driver_id,
                    created.vehicle_id,
                    created.id
                );
                Ok(created)
            }
        }
    }

    pub async fn delete_by_id(&self, id: i32, scope: Option<i32>) -> Result<(), AppError> {
        let row = self
            .repository
            .find_row(id, scope)
            .await?
            .ok_or_else(|| not_found_error("Assignment", id))?;

        self.repository.delete(row.id).await?;
        tracing::info!("🗑️ Asignación eliminada: id {}", row.id);
        Ok(())
    }

    pub async fn delete_by_pair(
        &self,
        query: DeleteByPairQuery,
        scope: Option<i32>,
    ) -> Result<(), AppError> {
        let row = self
            .repository
            .find_by_pair(query.driver_id, query.vehicle_id, scope)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Assignment for driver '{}' and vehicle '{}' not found",
                    query.driver_id, query.vehicle_id
                ))
            })?;

        self.repository.delete(row.id).await?;
        tracing::info!(
            "🗑️ Asignación eliminada: conductor {} / vehículo {}",
            query.driver_id,
            query.vehicle_id
        );
        Ok(())
    }
}

/// Verifica que el vehículo pertenezca a la empresa del scope.
/// Sin scope no hay restricción.
fn ensure_vehicle_in_scope(vehicle: &Vehicle, scope: Option<i32>) -> Result<(), AppError> {
    if let Some(company_id) = scope {
        if vehicle.company_id != Some(company_id) {
            return Err(AppError::Forbidden(
                "Vehicle does not belong to your company".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle_of_company(company_id: Option<i32>) -> Vehicle {
        Vehicle {
            id: 1,
            plate: "ABC123".to_string(),
            model: "2020".to_string(),
            internal_number: None,
            mobile_number: None,
            make_id: 1,
            insurer_id: None,
            communication_company_id: None,
            owner_id: None,
            company_id,
        }
    }

    #[test]
    fn test_scope_matching_company_passes() {
        let vehicle = vehicle_of_company(Some(7));
        assert!(ensure_vehicle_in_scope(&vehicle, Some(7)).is_ok());
    }

    #[test]
    fn test_scope_mismatch_is_forbidden() {
        let vehicle = vehicle_of_company(Some(7));
        let err = ensure_vehicle_in_scope(&vehicle, Some(8)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_vehicle_without_company_is_forbidden_under_scope() {
        let vehicle = vehicle_of_company(None);
        let err = ensure_vehicle_in_scope(&vehicle, Some(7)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_no_scope_allows_any_vehicle() {
        assert!(ensure_vehicle_in_scope(&vehicle_of_company(Some(7)), None).is_ok());
        assert!(ensure_vehicle_in_scope(&vehicle_of_company(None), None).is_ok());
    }
}
