use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    dto::OwnerDto,
    entities::owner,
    errors::ServiceError,
    mapping::map_all,
    repositories::{DataContext, OwnersRepository, UnitOfWork},
};

/// Service for managing owners
#[derive(Clone)]
pub struct OwnerService {
    owners: Arc<dyn OwnersRepository>,
    context: Arc<dyn DataContext>,
}

impl OwnerService {
    pub fn new(owners: Arc<dyn OwnersRepository>, context: Arc<dyn DataContext>) -> Self {
        Self { owners, context }
    }

    pub fn from_unit_of_work(uow: &UnitOfWork) -> Self {
        Self::new(uow.owners(), uow.data_context())
    }

    /// Every owner, unordered
    #[instrument(skip(self))]
    pub async fn list_owners(&self) -> Result<Vec<OwnerDto>, ServiceError> {
        Ok(map_all(self.owners.select_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_owner(&self, id: Uuid) -> Result<OwnerDto, ServiceError> {
        self.find_owner(id).await.map(OwnerDto::from)
    }

    #[instrument(skip(self))]
    pub async fn get_owner_by_name(&self, name: &str) -> Result<OwnerDto, ServiceError> {
        let matches = self.owners.find_by_name(name).await?;
        single_match(matches, "name", name)
    }

    #[instrument(skip(self))]
    pub async fn get_owner_by_email(&self, email: &str) -> Result<OwnerDto, ServiceError> {
        let matches = self.owners.find_by_email(email).await?;
        single_match(matches, "email", email)
    }

    /// Owners born between `from` and `to`, both inclusive. A reversed range is
    /// not swapped and simply matches nothing.
    #[instrument(skip(self))]
    pub async fn get_owners_by_birthdate(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<OwnerDto>, ServiceError> {
        if from > to {
            return Ok(Vec::new());
        }
        Ok(map_all(self.owners.filter_by_birthdate(from, to).await?))
    }

    #[instrument(skip(self))]
    pub async fn create_owner(&self, dto: OwnerDto) -> Result<OwnerDto, ServiceError> {
        let model = owner::Model::from(dto);

        if self.owners.find_by_id(model.id).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Owner {} already exists",
                model.id
            )));
        }

        self.owners.add(model.clone());
        self.context.save_all_changes().await?;

        info!(owner_id = %model.id, "Owner created");
        Ok(model.into())
    }

    /// Updates name and email of an existing owner and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_owner(&self, id: Uuid, dto: OwnerDto) -> Result<OwnerDto, ServiceError> {
        if id != dto.id {
            return Err(ServiceError::InvalidInput(format!(
                "Owner id in path ({}) does not match id in body ({})",
                id, dto.id
            )));
        }

        let mut model = self.find_owner(id).await?;
        model.update(dto.name, dto.email);

        self.owners.update(model.clone());
        self.context.save_all_changes().await?;

        info!(owner_id = %id, "Owner updated");
        Ok(model.into())
    }

    /// Deletes an owner. Accounts referencing it are left in place.
    #[instrument(skip(self))]
    pub async fn delete_owner(&self, id: Uuid) -> Result<(), ServiceError> {
        let model = self.find_owner(id).await?;

        self.owners.remove(model);
        self.context.save_all_changes().await?;

        info!(owner_id = %id, "Owner deleted");
        Ok(())
    }

    async fn find_owner(&self, id: Uuid) -> Result<owner::Model, ServiceError> {
        self.owners
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Owner {} not found", id)))
    }
}

fn single_match(
    mut matches: Vec<owner::Model>,
    field: &str,
    value: &str,
) -> Result<OwnerDto, ServiceError> {
    match matches.len() {
        0 => Err(ServiceError::NotFound(format!(
            "No owner with {} '{}'",
            field, value
        ))),
        1 => Ok(matches.remove(0).into()),
        n => Err(ServiceError::Conflict(format!(
            "{} owners share the {} '{}'",
            n, field, value
        ))),
    }
}
