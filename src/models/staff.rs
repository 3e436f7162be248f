// src/models/staff.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Funcionários e gerentes dividem a mesma tabela; o `kind` separa as listagens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "staff_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffKind {
    Staff,
    Manager,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: Uuid,
    pub hostel_id: Option<Uuid>,

    #[schema(example = "João Lima")]
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,

    pub kind: StaffKind,

    #[schema(example = "Recepção")]
    pub position: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffPayload {
    pub hostel_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "name_length"))]
    #[schema(example = "João Lima")]
    pub name: String,

    #[validate(length(max = 50, message = "too_long"))]
    pub phone: Option<String>,

    #[validate(email(message = "email"), length(max = 255, message = "too_long"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "too_long"))]
    #[schema(example = "Recepção")]
    pub position: Option<String>,
}
