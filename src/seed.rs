//! Fixture data for local databases and tests.
//!
//! Four owners, two of them sharing the family name "Mustermann" and two born in
//! the 1960s, plus a handful of accounts. Ids are fixed so fixtures can be
//! referenced directly.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::entities::{account, owner};
use crate::errors::ServiceError;
use crate::repositories::UnitOfWork;

fn fixed_id(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Owners in insertion order
pub fn owners() -> Vec<owner::Model> {
    vec![
        owner::Model::new(
            fixed_id("10000000-0000-0000-0000-000000000000"),
            "Erika Mustermann".into(),
            "erika.mustermann@t-online.de".into(),
            date(1988, 2, 1),
        ),
        owner::Model::new(
            fixed_id("20000000-0000-0000-0000-000000000000"),
            "Max Mustermann".into(),
            "max.mustermann@gmail.com".into(),
            date(1982, 1, 10),
        ),
        owner::Model::new(
            fixed_id("30000000-0000-0000-0000-000000000000"),
            "Arno Arndt".into(),
            "a.arndt@t-online.de".into(),
            date(1967, 3, 11),
        ),
        owner::Model::new(
            fixed_id("40000000-0000-0000-0000-000000000000"),
            "Benno Bauer".into(),
            "b.bauer@gmail.com".into(),
            date(1965, 4, 14),
        ),
    ]
}

/// Accounts in insertion order, already linked to [`owners`]
pub fn accounts() -> Vec<account::Model> {
    let owners = owners();
    let specs: [(&str, &str, f64, usize); 6] = [
        ("01000000-0000-0000-0000-000000000000", "DE10 1000 0000 0000 0000 00", 2100.0, 0),
        ("02000000-0000-0000-0000-000000000000", "DE10 2000 0000 0000 0000 00", 2000.0, 0),
        ("03000000-0000-0000-0000-000000000000", "DE20 1000 0000 0000 0000 00", 3000.0, 1),
        ("04000000-0000-0000-0000-000000000000", "DE30 1000 0000 0000 0000 00", 2500.0, 2),
        ("05000000-0000-0000-0000-000000000000", "DE40 1000 0000 0000 0000 00", 1900.0, 3),
        ("06000000-0000-0000-0000-000000000000", "DE40 2000 0000 0000 0000 00", 5000.0, 3),
    ];

    specs
        .iter()
        .map(|(id, iban, balance, owner_index)| {
            let mut model = account::Model::new(fixed_id(id), Some(*iban), *balance, Uuid::nil());
            owners[*owner_index].add_account(&mut model);
            model
        })
        .collect()
}

/// Writes every fixture through one unit of work and returns the affected row count.
pub async fn insert_seed(db: Arc<DatabaseConnection>) -> Result<usize, ServiceError> {
    let uow = UnitOfWork::new(db);

    let owners = owners();
    info!(count = owners.len(), "Staging seed owners");
    for owner in owners {
        uow.owners().add(owner);
    }

    let accounts = accounts();
    info!(count = accounts.len(), "Staging seed accounts");
    for account in accounts {
        uow.accounts().add(account);
    }

    uow.data_context().save_all_changes().await
}
