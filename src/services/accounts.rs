use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    common::short_id,
    dto::AccountDto,
    entities::account,
    errors::ServiceError,
    iban,
    mapping::map_all,
    repositories::{AccountsRepository, DataContext, OwnersRepository, UnitOfWork},
};

/// Service for managing accounts and linking them to owners
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountsRepository>,
    owners: Arc<dyn OwnersRepository>,
    context: Arc<dyn DataContext>,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountsRepository>,
        owners: Arc<dyn OwnersRepository>,
        context: Arc<dyn DataContext>,
    ) -> Self {
        Self {
            accounts,
            owners,
            context,
        }
    }

    pub fn from_unit_of_work(uow: &UnitOfWork) -> Self {
        Self::new(uow.accounts(), uow.owners(), uow.data_context())
    }

    /// Accounts held by `owner_id`. An unknown owner simply has none.
    #[instrument(skip(self))]
    pub async fn list_accounts_of_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<AccountDto>, ServiceError> {
        Ok(map_all(self.accounts.filter_by_owner_id(owner_id).await?))
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: Uuid) -> Result<AccountDto, ServiceError> {
        self.find_account(id).await.map(AccountDto::from)
    }

    #[instrument(skip(self))]
    pub async fn get_account_by_iban(&self, raw_iban: &str) -> Result<AccountDto, ServiceError> {
        let normalized = iban::normalize(raw_iban);
        self.accounts
            .find_by_iban(&normalized)
            .await?
            .map(AccountDto::from)
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No account with IBAN {}",
                    iban::format_grouped(&normalized)
                ))
            })
    }

    /// Opens an account for an existing owner. The owner in the path is
    /// authoritative; any `ownerId` in the body is overwritten.
    #[instrument(skip(self))]
    pub async fn create_account(
        &self,
        owner_id: Uuid,
        dto: AccountDto,
    ) -> Result<AccountDto, ServiceError> {
        let owner = self.owners.find_by_id(owner_id).await?.ok_or_else(|| {
            ServiceError::InvalidInput(format!("Owner {} does not exist", owner_id))
        })?;

        let mut model = account::Model::from(dto);
        if self.accounts.find_by_id(model.id).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Account {} already exists",
                model.id
            )));
        }

        owner.add_account(&mut model);
        self.accounts.add(model.clone());
        self.context.save_all_changes().await?;

        info!(
            account_id = %model.id,
            owner_id = %owner.id,
            iban = %iban::format_grouped(&model.iban),
            "Account created"
        );
        Ok(model.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_account(&self, owner_id: Uuid, id: Uuid) -> Result<(), ServiceError> {
        debug!(owner = %short_id(&owner_id), "Deleting account on behalf of owner");
        let model = self.find_account(id).await?;

        self.accounts.remove(model);
        self.context.save_all_changes().await?;

        info!(account_id = %id, "Account deleted");
        Ok(())
    }

    async fn find_account(&self, id: Uuid) -> Result<account::Model, ServiceError> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Account {} not found", id)))
    }
}
