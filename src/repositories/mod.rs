//! Identity-keyed repositories over the banking tables.
//!
//! Reads go straight to the pool. Writes are staged on a [`ChangeTracker`] shared
//! by every repository of one [`UnitOfWork`] and only reach the database when the
//! unit's [`DataContext::save_all_changes`] runs.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod account_repository;
pub mod owner_repository;
pub mod unit_of_work;

pub use account_repository::{AccountsRepository, SeaOrmAccountsRepository};
pub use owner_repository::{OwnersRepository, SeaOrmOwnersRepository};
pub use unit_of_work::{ChangeTracker, DataContext, PendingChange, SeaOrmDataContext, UnitOfWork};

#[cfg(test)]
pub use account_repository::MockAccountsRepository;
#[cfg(test)]
pub use owner_repository::MockOwnersRepository;
#[cfg(test)]
pub use unit_of_work::MockDataContext;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
