use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::owner::{Column, Entity as Owner, Model as OwnerModel};
use crate::errors::ServiceError;

use super::{BaseRepository, ChangeTracker, PendingChange, Repository};

/// Named queries and staged writes for owners
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OwnerModel>, ServiceError>;

    /// Every owner whose name matches exactly
    async fn find_by_name(&self, name: &str) -> Result<Vec<OwnerModel>, ServiceError>;

    /// Every owner whose email matches exactly
    async fn find_by_email(&self, email: &str) -> Result<Vec<OwnerModel>, ServiceError>;

    /// Owners born within `from..=to`
    async fn filter_by_birthdate(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<OwnerModel>, ServiceError>;

    async fn select_all(&self) -> Result<Vec<OwnerModel>, ServiceError>;

    fn add(&self, owner: OwnerModel);

    fn update(&self, owner: OwnerModel);

    fn remove(&self, owner: OwnerModel);
}

/// Repository for owner operations
#[derive(Debug, Clone)]
pub struct SeaOrmOwnersRepository {
    base: BaseRepository,
    tracker: ChangeTracker,
}

impl SeaOrmOwnersRepository {
    pub fn new(db: Arc<DatabaseConnection>, tracker: ChangeTracker) -> Self {
        Self {
            base: BaseRepository::new(db),
            tracker,
        }
    }
}

#[async_trait]
impl OwnersRepository for SeaOrmOwnersRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OwnerModel>, ServiceError> {
        Owner::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<OwnerModel>, ServiceError> {
        Owner::find()
            .filter(Column::Name.eq(name))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<OwnerModel>, ServiceError> {
        Owner::find()
            .filter(Column::Email.eq(email))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn filter_by_birthdate(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<OwnerModel>, ServiceError> {
        Owner::find()
            .filter(Column::Birthdate.gte(from))
            .filter(Column::Birthdate.lte(to))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    async fn select_all(&self) -> Result<Vec<OwnerModel>, ServiceError> {
        Owner::find()
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::DatabaseError)
    }

    fn add(&self, owner: OwnerModel) {
        self.tracker.stage(PendingChange::AddOwner(owner));
    }

    fn update(&self, owner: OwnerModel) {
        self.tracker.stage(PendingChange::UpdateOwner(owner));
    }

    fn remove(&self, owner: OwnerModel) {
        self.tracker.stage(PendingChange::RemoveOwner(owner.id));
    }
}
