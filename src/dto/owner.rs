use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Owner as sent and received over HTTP
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "10000000-0000-0000-0000-000000000000",
    "name": "Max Mustermann",
    "email": "max@x.de",
    "birthdate": "1960-05-01"
}))]
pub struct OwnerDto {
    /// Owner UUID; generated when omitted on create
    #[serde(default = "super::new_id")]
    pub id: Uuid,
    #[schema(example = "Max Mustermann")]
    pub name: String,
    #[schema(example = "max@x.de")]
    pub email: String,
    /// Date of birth in `yyyy-MM-dd`
    #[schema(example = "1960-05-01")]
    pub birthdate: NaiveDate,
}

impl OwnerDto {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        birthdate: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            birthdate,
        }
    }

    /// Copy of this owner with new contact details.
    pub fn with_contact(&self, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_with_plain_date() {
        let id = Uuid::parse_str("10000000-0000-0000-0000-000000000000").unwrap();
        let dto = OwnerDto::new(
            id,
            "Max Mustermann",
            "max@x.de",
            NaiveDate::from_ymd_opt(1960, 5, 1).unwrap(),
        );

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": "10000000-0000-0000-0000-000000000000",
                "name": "Max Mustermann",
                "email": "max@x.de",
                "birthdate": "1960-05-01"
            })
        );
    }

    #[test]
    fn missing_id_gets_a_fresh_one() {
        let a: OwnerDto = serde_json::from_value(json!({
            "name": "A", "email": "a@x.de", "birthdate": "1990-01-01"
        }))
        .unwrap();
        let b: OwnerDto = serde_json::from_value(json!({
            "name": "A", "email": "a@x.de", "birthdate": "1990-01-01"
        }))
        .unwrap();
        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_contact_keeps_identity_and_birthdate() {
        let dto = OwnerDto::new(
            Uuid::new_v4(),
            "Max",
            "max@x.de",
            NaiveDate::from_ymd_opt(1960, 5, 1).unwrap(),
        );
        let changed = dto.with_contact("Moritz", "moritz@x.de");
        assert_eq!(changed.id, dto.id);
        assert_eq!(changed.birthdate, dto.birthdate);
        assert_eq!(changed.name, "Moritz");
        assert_eq!(dto.name, "Max");
    }
}
