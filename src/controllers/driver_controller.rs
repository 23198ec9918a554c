//! Controller de conductores
//!
//! Las respuestas exponen EPS y ARL como escalares `epsId`/`arlId`;
//! la vista con los objetos anidados vive en la tarjeta de control.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverQuery, UpdateDriverRequest};
use crate::models::driver::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    /// Listado; con `identification` hace búsqueda por prefijo
    /// (autocompletar) limitada a 20 filas.
    pub async fn search(&self, query: DriverQuery) -> Result<Vec<Driver>, AppError> {
        match query.identification {
            Some(term) => {
                let rows = self.repository.search_by_identification(&term).await?;
                Ok(rows.into_iter().map(|r| r.into_driver()).collect())
            }
            None => self.repository.find_all().await,
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Driver, AppError> {
        let row = self
            .repository
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        Ok(row.into_driver())
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        request.validate()?;

        if self
            .repository
            .identification_exists(&request.identification, None)
            .await?
        {
            return Err(conflict_error("Driver", "identification", &request.identification));
        }

        let driver = Driver {
            id: 0, // lo asigna la base
            identification: request.identification,
            issued_in: request.issued_in,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            address: request.address,
            license: request.license,
            category: request.category,
            expires_on: request.expires_on,
            blood_type: request.blood_type,
            photo: request.photo,
            eps_id: request.eps_id,
            arl_id: request.arl_id,
        };

        let created = self.repository.create(&driver).await?;
        tracing::info!(
            "🚖 Conductor creado: {} {} ({})",
            created.first_name,
            created.last_name,
            created.identification
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateDriverRequest) -> Result<Driver, AppError> {
        request.validate()?;

        let mut driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        if let Some(identification) = request.identification {
            if identification != driver.identification
                && self
                    .repository
                    .identification_exists(&identification, Some(id))
                    .await?
            {
                return Err(conflict_error("Driver", "identification", &identification));
            }
            driver.identification = identification;
        }
        if let Some(issued_in) = request.issued_in {
            driver.issued_in = issued_in;
        }
        if let Some(first_name) = request.first_name {
            driver.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            driver.last_name = last_name;
        }
        if let Some(phone) = request.phone {
            driver.phone = phone;
        }
        if let Some(address) = request.address {
            driver.address = address;
        }
        if let Some(license) = request.license {
            driver.license = license;
        }
        if let Some(category) = request.category {
            driver.category = category;
        }
        if let Some(expires_on) = request.expires_on {
            driver.expires_on = expires_on;
        }
        if let Some(blood_type) = request.blood_type {
            driver.blood_type = blood_type;
        }
        if let Some(photo) = request.photo {
            driver.photo = photo;
        }
        if let Some(eps_id) = request.eps_id {
            driver.eps_id = eps_id;
        }
        if let Some(arl_id) = request.arl_id {
            driver.arl_id = arl_id;
        }

        self.repository.update(&driver).await
    }

    /// El borrado arrastra las asignaciones del conductor (cascade).
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error("Driver", id));
        }
        tracing::info!("🗑️ Conductor eliminado: id {}", id);
        Ok(())
    }
}
