//! Controller de empresas transportadoras

use sqlx::PgPool;
use validator::Validate;

use crate::dto::company_dto::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::models::company::Company;
use crate::repositories::company_repository::CompanyRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Company, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Company", id))
    }

    pub async fn create(&self, request: CreateCompanyRequest) -> Result<Company, AppError> {
        request.validate()?;

        if self.repository.nit_exists(&request.nit, None).await? {
            return Err(conflict_error("Company", "NIT", &request.nit));
        }

        let company = Company {
            id: 0, // lo asigna la base
            nit: request.nit,
            name: request.name,
            phone: request.phone,
            address: request.address,
        };

        let created = self.repository.create(&company).await?;
        tracing::info!("🏢 Empresa creada: {} (NIT {})", created.name, created.nit);
        Ok(created)
    }

    pub async fn update(&self, id: i32, request: UpdateCompanyRequest) -> Result<Company, AppError> {
        request.validate()?;

        let mut company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Company", id))?;

        if let Some(nit) = request.nit {
            if nit != company.nit && self.repository.nit_exists(&nit, Some(id)).await? {
                return Err(conflict_error("Company", "NIT", &nit));
            }
            company.nit = nit;
        }
        if let Some(name) = request.name {
            company.name = name;
        }
        if let Some(phone) = request.phone {
            company.phone = phone;
        }
        if let Some(address) = request.address {
            company.address = address;
        }

        self.repository.update(&company).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(not_found_error("Company", id));
        }
        tracing::info!("🗑️ Empresa eliminada: id {}", id);
        Ok(())
    }
}
