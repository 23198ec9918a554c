//! Controller de vehículos

use sqlx::PgPool;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleQuery, VehicleResponse};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Listado con filtros opcionales de subcadena de placa y empresa
    pub async fn list(&self, query: VehicleQuery) -> Result<Vec<VehicleResponse>, AppError> {
        let rows = self
            .repository
            .find_all(query.plate.as_deref(), query.company_id)
            .await?;

        Ok(rows.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleResponse, AppError> {
        let row = self
            .repository
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(VehicleResponse::from(row))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if self.repository.plate_exists(&request.plate, None).await? {
            return Err(conflict_error("Vehicle", "plate", &request.plate));
        }

        let vehicle = Vehicle {
            id: 0, // lo asigna la base
            plate: request.plate,
            model: request.model,
            internal_number: request.internal_number,
            mobile_number: request.mobile_number,
            make_id: request.make_id,
            insurer_id: request.insurer_id,
            communication_company_id: request.communication_company_id,
            owner_id: request.owner_id,
            company_id: request.company_id,
        };

        let created = self.repository.create(&vehicle).await?;
        tracing::info!("🚗 Vehículo creado: {} (id {})", created.plate, created.id);

        self.get_by_id(created.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let mut vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        if let Some(plate) = request.plate {
            if plate != vehicle.plate && self.repository.plate_exists(&plate, Some(id)).await? {
                return Err(conflict_error("Vehicle", "plate", &plate));
            }
            vehicle.plate = plate;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(internal_number) = request.internal_number {
            vehicle.internal_number = internal_number;
        }
        if let Some(mobile_number) = request.mobile_number {
            vehicle.mobile_number = mobile_number;
        }
        if let Some(make_id) = request.make_id {
            vehicle.make_id = make_id;
        }
        if let Some(insurer_id) = request.insurer_id {
            vehicle.insurer_id = insurer_id;
        }
        if let Some(communication_company_id) = request.communication_company_id {
            vehicle.communication_company_id = communication_company_id;
        }
        if let Some(owner_id) = request.owner_id {
            vehicle.owner_id = owner_id;
        }
        if let Some(company_id) = request.company_id {
            vehicle.company_id = company_id;
        }

        self.repository.update(&vehicle).await?;
        self.get_by_id(id).await
    }

    /// El borrado arrastra las asignaciones conductor-vehículo (cascade).
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error("Vehicle", id));
        }
        tracing::info!("🗑️ Vehículo eliminado: id {}", id);
        Ok(())
    }
}
