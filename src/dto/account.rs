use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account as sent and received over HTTP
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a0000000-0000-0000-0000-000000000001",
    "iban": "DE12345678901234567890",
    "balance": 1250.5,
    "ownerId": "10000000-0000-0000-0000-000000000000"
}))]
pub struct AccountDto {
    /// Account UUID; generated when omitted on create
    #[serde(default = "super::new_id")]
    pub id: Uuid,
    /// Left empty (or shorter than 8 characters) to have one generated
    #[serde(default)]
    #[schema(example = "DE12345678901234567890")]
    pub iban: String,
    #[serde(default)]
    #[schema(example = 1250.5)]
    pub balance: f64,
    /// Ignored on create; the owner in the path wins
    #[serde(default)]
    pub owner_id: Uuid,
}

impl AccountDto {
    pub fn new(id: Uuid, iban: impl Into<String>, balance: f64, owner_id: Uuid) -> Self {
        Self {
            id,
            iban: iban.into(),
            balance,
            owner_id,
        }
    }
}
