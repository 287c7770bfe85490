//! Conversions between persisted entities and transfer representations.
//!
//! Owners map field for field. Accounts coming in from a client go through
//! [`account::Model::new`] so the IBAN policy applies to every inbound account.

use crate::dto::{AccountDto, OwnerDto};
use crate::entities::{account, owner};

impl From<owner::Model> for OwnerDto {
    fn from(model: owner::Model) -> Self {
        OwnerDto {
            id: model.id,
            name: model.name,
            email: model.email,
            birthdate: model.birthdate,
        }
    }
}

impl From<OwnerDto> for owner::Model {
    fn from(dto: OwnerDto) -> Self {
        owner::Model::new(dto.id, dto.name, dto.email, dto.birthdate)
    }
}

impl From<account::Model> for AccountDto {
    fn from(model: account::Model) -> Self {
        AccountDto {
            id: model.id,
            iban: model.iban,
            balance: model.balance,
            owner_id: model.owner_id,
        }
    }
}

impl From<AccountDto> for account::Model {
    fn from(dto: AccountDto) -> Self {
        account::Model::new(dto.id, Some(&dto.iban), dto.balance, dto.owner_id)
    }
}

/// Maps a collection element-wise, keeping order.
pub fn map_all<S, T>(items: Vec<S>) -> Vec<T>
where
    T: From<S>,
{
    items.into_iter().map(T::from).collect()
}
