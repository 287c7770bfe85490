use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::{account, owner};
use crate::errors::ServiceError;

use super::{
    AccountsRepository, OwnersRepository, SeaOrmAccountsRepository, SeaOrmOwnersRepository,
};

/// A write waiting for the next commit
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    AddOwner(owner::Model),
    UpdateOwner(owner::Model),
    RemoveOwner(Uuid),
    AddAccount(account::Model),
    RemoveAccount(Uuid),
}

/// Ordered list of staged writes, shared by the repositories of one unit of work
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    pending: Arc<Mutex<Vec<PendingChange>>>,
}

impl ChangeTracker {
    pub fn stage(&self, change: PendingChange) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change);
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes every staged change, leaving the tracker empty.
    pub fn drain(&self) -> Vec<PendingChange> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Commits whatever the repositories have staged
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataContext: Send + Sync {
    /// Applies all staged changes in one transaction and returns the number of
    /// affected rows. Staged changes are consumed even when the commit fails.
    async fn save_all_changes(&self) -> Result<usize, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct SeaOrmDataContext {
    db: Arc<DatabaseConnection>,
    tracker: ChangeTracker,
}

impl SeaOrmDataContext {
    pub fn new(db: Arc<DatabaseConnection>, tracker: ChangeTracker) -> Self {
        Self { db, tracker }
    }

    async fn apply(txn: &DatabaseTransaction, change: PendingChange) -> Result<u64, ServiceError> {
        let affected = match change {
            PendingChange::AddOwner(m) => {
                let model = owner::ActiveModel {
                    id: Set(m.id),
                    name: Set(m.name),
                    email: Set(m.email),
                    birthdate: Set(m.birthdate),
                };
                owner::Entity::insert(model).exec_without_returning(txn).await?
            }
            PendingChange::UpdateOwner(m) => {
                let model = owner::ActiveModel {
                    id: Unchanged(m.id),
                    name: Set(m.name),
                    email: Set(m.email),
                    birthdate: NotSet,
                };
                owner::Entity::update_many()
                    .set(model)
                    .filter(owner::Column::Id.eq(m.id))
                    .exec(txn)
                    .await?
                    .rows_affected
            }
            PendingChange::RemoveOwner(id) => {
                owner::Entity::delete_by_id(id).exec(txn).await?.rows_affected
            }
            PendingChange::AddAccount(m) => {
                let model = account::ActiveModel {
                    id: Set(m.id),
                    iban: Set(m.iban),
                    balance: Set(m.balance),
                    owner_id: Set(m.owner_id),
                };
                account::Entity::insert(model)
                    .exec_without_returning(txn)
                    .await?
            }
            PendingChange::RemoveAccount(id) => {
                account::Entity::delete_by_id(id).exec(txn).await?.rows_affected
            }
        };
        Ok(affected)
    }
}

#[async_trait]
impl DataContext for SeaOrmDataContext {
    async fn save_all_changes(&self) -> Result<usize, ServiceError> {
        let changes = self.tracker.drain();
        if changes.is_empty() {
            debug!("No staged changes to save");
            return Ok(0);
        }

        let staged = changes.len();
        let txn = self.db.begin().await?;
        let mut affected = 0u64;
        for change in changes {
            affected += Self::apply(&txn, change).await?;
        }
        txn.commit().await?;

        info!(staged, affected, "Saved staged changes");
        Ok(affected as usize)
    }
}

/// Per-request bundle of repositories sharing one change tracker
#[derive(Debug, Clone)]
pub struct UnitOfWork {
    owners: Arc<SeaOrmOwnersRepository>,
    accounts: Arc<SeaOrmAccountsRepository>,
    context: Arc<SeaOrmDataContext>,
}

impl UnitOfWork {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let tracker = ChangeTracker::default();
        Self {
            owners: Arc::new(SeaOrmOwnersRepository::new(db.clone(), tracker.clone())),
            accounts: Arc::new(SeaOrmAccountsRepository::new(db.clone(), tracker.clone())),
            context: Arc::new(SeaOrmDataContext::new(db, tracker)),
        }
    }

    pub fn owners(&self) -> Arc<dyn OwnersRepository> {
        self.owners.clone()
    }

    pub fn accounts(&self) -> Arc<dyn AccountsRepository> {
        self.accounts.clone()
    }

    pub fn data_context(&self) -> Arc<dyn DataContext> {
        self.context.clone()
    }
}
