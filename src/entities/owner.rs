use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub birthdate: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Accounts,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(id: Uuid, name: String, email: String, birthdate: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            birthdate,
        }
    }

    /// Replaces the contact fields. Identity and birthdate are left untouched.
    pub fn update(&mut self, name: String, email: String) {
        self.name = name;
        self.email = email;
    }

    /// Links an account to this owner.
    pub fn add_account(&self, account: &mut super::account::Model) {
        account.owner_id = self.id;
    }
}
