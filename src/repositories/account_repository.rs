use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::account::{Column, Entity as Account, Model as AccountModel};
use crate::errors::ServiceError;

use super::{BaseRepository, ChangeTracker, PendingChange, Repository};

/// Named queries and staged writes for accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccountModel>, ServiceError>;

    /// First account holding exactly this (already normalized) IBAN
    async fn find_by_iban(&self, iban: &str) -> Result<Option<AccountModel>, ServiceError>;

    async fn filter_by_owner_id(&self, owner_id: Uuid) -> Result<Vec<AccountModel>, ServiceError>;

    fn add(&self, account: AccountModel);

    fn remove(&self, account: AccountModel);
}

/// Repository for account operations
#[derive(Debug, Clone)]
pub struct SeaOrmAccountsRepository {
    base: BaseRepository,
    tracker: ChangeTracker,
}

impl SeaOrmAccountsRepository {
    pub fn new(db: Arc<DatabaseConnection>, tracker: ChangeTracker) -> Self {
        Self {
            base: BaseRepository::new(db),
            tracker,
        }
    }
}

#[async_trait]
impl AccountsRepository for SeaOrmAccountsRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccountModel>, ServiceError> {
        Account::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn find_by_iban(&self, iban: &str) -> Result<Option<AccountModel>, ServiceError> {
        Account::find()
            .filter(Column::Iban.eq(iban))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn filter_by_owner_id(&self, owner_id: Uuid) -> Result<Vec<AccountModel>, ServiceError> {
        Account::find()
            .filter(Column::OwnerId.eq(owner_id))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    fn add(&self, account: AccountModel) {
        self.tracker.stage(PendingChange::AddAccount(account));
    }

    fn remove(&self, account: AccountModel) {
        self.tracker.stage(PendingChange::RemoveAccount(account.id));
    }
}
