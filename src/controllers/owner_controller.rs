//! Controller de propietarios

use sqlx::PgPool;
use validator::Validate;

use crate::dto::owner_dto::{CreateOwnerRequest, UpdateOwnerRequest};
use crate::models::owner::Owner;
use crate::repositories::owner_repository::OwnerRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct OwnerController {
    repository: OwnerRepository,
}

impl OwnerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OwnerRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Owner>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Owner, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Owner", id))
    }

    pub async fn create(&self, request: CreateOwnerRequest) -> Result<Owner, AppError> {
        request.validate()?;

        if self
            .repository
            .identification_exists(&request.identification, None)
            .await?
        {
            return Err(conflict_error("Owner", "identification", &request.identification));
        }

        let owner = Owner {
            id: 0, // lo asigna la base
            name: request.name,
            identification: request.identification,
            email: request.email,
            address: request.address,
            phone: request.phone,
        };

        let created = self.repository.create(&owner).await?;
        tracing::info!("👤 Propietario creado: {} ({})", created.name, created.identification);
        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateOwnerRequest) -> Result<Owner, AppError> {
        request.validate()?;

        let mut owner = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Owner", id))?;

        if let Some(identification) = request.identification {
            if identification != owner.identification
                && self
                    .repository
                    .identification_exists(&identification, Some(id))
                    .await?
            {
                return Err(conflict_error("Owner", "identification", &identification));
            }
            owner.identification = identification;
        }
        if let Some(name) = request.name {
            owner.name = name;
        }
        if let Some(email) = request.email {
            owner.email = email;
        }
        if let Some(address) = request.address {
            owner.address = address;
        }
        if let Some(phone) = request.phone {
            owner.phone = phone;
        }

        self.repository.update(&owner).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error("Owner", id));
        }
        tracing::info!("🗑️ Propietario eliminado: id {}", id);
        Ok(())
    }
}
