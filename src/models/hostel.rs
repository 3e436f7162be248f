// src/models/hostel.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Hostel Central")]
    pub name: String,

    #[schema(example = "Rua das Flores, 123")]
    pub address_line: Option<String>,
    #[schema(example = "São Paulo")]
    pub city: Option<String>,
    #[schema(example = "SP")]
    pub state: Option<String>,
    #[schema(example = "01310-100")]
    pub postal_code: Option<String>,

    #[schema(example = 3)]
    pub total_floors: i32,
    #[schema(example = 10)]
    pub rooms_per_floor: i32,

    // Contato do gerente responsável
    pub manager_name: Option<String>,
    pub manager_phone: Option<String>,
    pub manager_email: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Usado tanto no POST quanto no PUT (substituição completa)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostelPayload {
    #[validate(length(min = 1, max = 255, message = "name_length"))]
    #[schema(example = "Hostel Central")]
    pub name: String,

    pub address_line: Option<String>,
    #[validate(length(max = 100, message = "too_long"))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "too_long"))]
    pub state: Option<String>,
    #[validate(length(max = 20, message = "too_long"))]
    pub postal_code: Option<String>,

    #[validate(range(min = 1, max = 200, message = "floors_range"))]
    #[schema(example = 3)]
    pub total_floors: i32,

    #[validate(range(min = 1, max = 99, message = "rooms_range"))]
    #[schema(example = 10)]
    pub rooms_per_floor: i32,

    #[validate(length(max = 255, message = "too_long"))]
    pub manager_name: Option<String>,
    #[validate(length(max = 50, message = "too_long"))]
    pub manager_phone: Option<String>,

    #[validate(email(message = "email"), length(max = 255, message = "too_long"))]
    #[schema(example = "gerente@hostel.com")]
    pub manager_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(total_floors: i32, rooms_per_floor: i32) -> HostelPayload {
        HostelPayload {
            name: "Hostel Central".into(),
            address_line: None,
            city: None,
            state: None,
            postal_code: None,
            total_floors,
            rooms_per_floor,
            manager_name: None,
            manager_phone: None,
            manager_email: Some("gerente@hostel.com".into()),
        }
    }

    #[test]
    fn accepts_a_regular_layout() {
        assert!(payload(3, 10).validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_oversized_layouts() {
        let errors = payload(0, 100).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("total_floors"));
        assert!(fields.contains_key("rooms_per_floor"));
    }

    #[test]
    fn rejects_texts_longer_than_their_columns() {
        let mut p = payload(3, 10);
        p.postal_code = Some("0".repeat(21));
        p.manager_email = Some(format!("{}@hostel.com", "g".repeat(250)));

        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("postal_code"));
        assert!(fields.contains_key("manager_email"));
        assert!(!fields.contains_key("name"));
    }
}
