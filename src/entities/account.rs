use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::iban;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub iban: String,
    #[sea_orm(column_type = "Double")]
    pub balance: f64,
    pub owner_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Builds an account, normalizing the supplied IBAN or generating a
    /// placeholder when it is missing or too short.
    pub fn new(id: Uuid, iban: Option<&str>, balance: f64, owner_id: Uuid) -> Self {
        Self {
            id,
            iban: iban::normalize_or_generate(iban),
            balance,
            owner_id,
        }
    }
}
