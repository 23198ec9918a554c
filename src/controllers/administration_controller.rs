//! Controller de registros de administración

use sqlx::PgPool;
use validator::Validate;

use crate::dto::administration_dto::{
    AdministrationResponse, CreateAdministrationRequest, DateRangeRequest, VehicleIdRequest,
};
use crate::models::administration::Administration;
use crate::repositories::administration_repository::AdministrationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct AdministrationController {
    repository: AdministrationRepository,
    vehicle_repository: VehicleRepository,
}

impl AdministrationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdministrationRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAdministrationRequest,
    ) -> Result<AdministrationResponse, AppError> {
        request.validate()?;

        if request.value <= 0.0 {
            return Err(AppError::BadRequest("Value must be a positive number".to_string()));
        }

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        let record = Administration {
            id: 0, // lo asigna la base
            date: request.date,
            value: request.truncated_value(),
            detail: request.detail.trim().to_string(),
            payer: request.payer.trim().to_string(),
            vehicle_id: request.vehicle_id,
        };

        let created = self.repository.create(&record).await?;
        tracing::info!(
            "💰 Administración registrada: {} por {} (vehículo {})",
            created.value,
            created.payer,
            vehicle.plate
        );

        Ok(AdministrationResponse {
            id: created.id,
            date: created.date,
            value: created.value,
            detail: created.detail,
            payer: created.payer,
            vehicle,
        })
    }

    pub async fn list(&self) -> Result<Vec<AdministrationResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(AdministrationResponse::from).collect())
    }

    /// Rango inclusivo en ambos extremos; un rango invertido devuelve vacío.
    pub async fn list_by_date_range(
        &self,
        request: DateRangeRequest,
    ) -> Result<Vec<AdministrationResponse>, AppError> {
        request.validate()?;

        let rows = self
            .repository
            .find_by_date_range(request.start_date, request.end_date)
            .await?;
        Ok(rows.into_iter().map(AdministrationResponse::from).collect())
    }

    pub async fn list_by_vehicle(
        &self,
        request: VehicleIdRequest,
    ) -> Result<Vec<AdministrationResponse>, AppError> {
        request.validate()?;

        let rows = self.repository.find_by_vehicle(request.vehicle_id).await?;
        Ok(rows.into_iter().map(AdministrationResponse::from).collect())
    }
}
