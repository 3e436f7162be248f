// src/models/tenant.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tenant_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    Active,
    Inactive,
    Pending,
}

// ---
// Tenant (o hóspede/morador)
// ---
// A ocupação de camas não é uma relação guardada: é calculada juntando
// `room` + `bed` com a arquitetura gerada do hostel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440010")]
    pub id: Uuid,
    pub hostel_id: Option<Uuid>,

    #[schema(example = "Maria Souza")]
    pub name: String,
    #[schema(example = "(11) 99999-8888")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub emergency_contact: Option<String>,

    #[schema(example = "101")]
    pub room: Option<String>,
    #[schema(example = "A")]
    pub bed: Option<String>,

    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,

    #[schema(example = 850.00)]
    pub monthly_rent: Option<Decimal>,

    pub status: TenantStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_lease_dates"))]
pub struct TenantPayload {
    pub hostel_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "name_length"))]
    #[schema(example = "Maria Souza")]
    pub name: String,

    #[validate(length(max = 50, message = "too_long"))]
    pub phone: Option<String>,

    #[validate(email(message = "email"), length(max = 255, message = "too_long"))]
    pub email: Option<String>,

    #[validate(length(max = 255, message = "too_long"))]
    pub emergency_contact: Option<String>,

    #[validate(length(max = 10, message = "too_long"))]
    #[schema(example = "101")]
    pub room: Option<String>,

    #[validate(custom(function = "validate_bed", message = "bed_letter"))]
    #[schema(example = "A")]
    pub bed: Option<String>,

    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,

    #[validate(custom(function = "validate_rent", message = "rent_negative"))]
    pub monthly_rent: Option<Decimal>,

    #[schema(example = "Active")]
    pub status: TenantStatus,
}

// Filtros do GET /api/admin/table/tenants
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TenantFilter {
    pub hostel_id: Option<Uuid>,
    pub status: Option<TenantStatus>,
}

fn validate_bed(bed: &str) -> Result<(), ValidationError> {
    let bed = bed.trim();
    let mut chars = bed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ('A'..='D').contains(&c.to_ascii_uppercase()) => Ok(()),
        _ => Err(ValidationError::new("bed_letter")),
    }
}

fn validate_rent(rent: &Decimal) -> Result<(), ValidationError> {
    if rent.is_sign_negative() && !rent.is_zero() {
        return Err(ValidationError::new("rent_negative"));
    }
    Ok(())
}

fn validate_lease_dates(payload: &TenantPayload) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (payload.lease_start, payload.lease_end) {
        if end < start {
            let mut err = ValidationError::new("lease_dates");
            err.message = Some("lease_dates".into());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TenantPayload {
        TenantPayload {
            hostel_id: None,
            name: "Maria Souza".into(),
            phone: None,
            email: None,
            emergency_contact: None,
            room: Some("101".into()),
            bed: Some("a".into()),
            lease_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            lease_end: NaiveDate::from_ymd_opt(2024, 12, 31),
            monthly_rent: Some(Decimal::new(85000, 2)),
            status: TenantStatus::Active,
        }
    }

    #[test]
    fn lowercase_bed_letter_is_accepted() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn bed_outside_a_to_d_is_rejected() {
        let mut p = payload();
        p.bed = Some("E".into());
        assert!(p.validate().unwrap_err().field_errors().contains_key("bed"));

        p.bed = Some("AB".into());
        assert!(p.validate().is_err());
    }

    #[test]
    fn lease_cannot_end_before_it_starts() {
        let mut p = payload();
        p.lease_end = NaiveDate::from_ymd_opt(2023, 12, 31);
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_rent_is_rejected() {
        let mut p = payload();
        p.monthly_rent = Some(Decimal::new(-1, 0));
        assert!(p.validate().is_err());
    }

    #[test]
    fn oversized_texts_are_rejected_before_reaching_the_database() {
        let mut p = payload();
        p.room = Some("12345678901".into());
        p.name = "M".repeat(256);
        p.phone = Some("9".repeat(51));

        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("room"));
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("phone"));

        let mut p = payload();
        p.room = Some("1234567890".into());
        p.name = "M".repeat(255);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn status_uses_pascal_case_on_the_wire() {
        let json = serde_json::to_string(&TenantStatus::Active).unwrap();
        assert_eq!(json, "\"Active\"");
    }
}
