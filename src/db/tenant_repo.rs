// src/db/tenant_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::{map_missing_reference, AppError},
    models::tenant::{Tenant, TenantFilter, TenantPayload, TenantStatus},
};

const TENANT_COLUMNS: &str = r#"
    id, hostel_id, name, phone, email, emergency_contact,
    room, bed, lease_start, lease_end, monthly_rent, status,
    created_at, updated_at
"#;

#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

// A cama é sempre gravada em maiúscula e sem espaços
fn normalize(value: &Option<String>, uppercase: bool) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| if uppercase { v.to_ascii_uppercase() } else { v.to_string() })
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &TenantPayload) -> Result<Tenant, AppError> {
        let sql = format!(
            r#"
            INSERT INTO tenants (
                hostel_id, name, phone, email, emergency_contact,
                room, bed, lease_start, lease_end, monthly_rent, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {TENANT_COLUMNS}
            "#
        );

        let tenant = sqlx::query_as::<_, Tenant>(&sql)
            .bind(input.hostel_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.emergency_contact)
            .bind(normalize(&input.room, false))
            .bind(normalize(&input.bed, true))
            .bind(input.lease_start)
            .bind(input.lease_end)
            .bind(input.monthly_rent)
            .bind(input.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_missing_reference(e, "hostel"))?;

        Ok(tenant)
    }

    /// Lista na ordem de cadastro: é essa ordem que decide quem fica com
    /// uma cama disputada na arquitetura.
    pub async fn list(&self, filter: &TenantFilter) -> Result<Vec<Tenant>, AppError> {
        let sql = format!(
            r#"
            SELECT {TENANT_COLUMNS}
            FROM tenants
            WHERE ($1::uuid IS NULL OR hostel_id = $1)
              AND ($2::tenant_status IS NULL OR status = $2)
            ORDER BY created_at, id
            "#
        );

        let tenants = sqlx::query_as::<_, Tenant>(&sql)
            .bind(filter.hostel_id)
            .bind(filter.status)
            .fetch_all(&self.pool)
            .await?;

        Ok(tenants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, AppError> {
        let sql = format!("SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1");
        let tenant = sqlx::query_as::<_, Tenant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    pub async fn update(&self, id: Uuid, input: &TenantPayload) -> Result<Option<Tenant>, AppError> {
        let sql = format!(
            r#"
            UPDATE tenants SET
                hostel_id = $2, name = $3, phone = $4, email = $5, emergency_contact = $6,
                room = $7, bed = $8, lease_start = $9, lease_end = $10,
                monthly_rent = $11, status = $12,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TENANT_COLUMNS}
            "#
        );

        let tenant = sqlx::query_as::<_, Tenant>(&sql)
            .bind(id)
            .bind(input.hostel_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.emergency_contact)
            .bind(normalize(&input.room, false))
            .bind(normalize(&input.bed, true))
            .bind(input.lease_start)
            .bind(input.lease_end)
            .bind(input.monthly_rent)
            .bind(input.status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_missing_reference(e, "hostel"))?;

        Ok(tenant)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Para os cards do dashboard
    pub async fn count_by_status(&self) -> Result<Vec<(TenantStatus, i64)>, AppError> {
        let rows = sqlx::query_as::<_, (TenantStatus, i64)>(
            "SELECT status, COUNT(*) FROM tenants GROUP BY status",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalizes_room_and_bed() {
        assert_eq!(normalize(&Some(" 101 ".into()), false).as_deref(), Some("101"));
        assert_eq!(normalize(&Some("b".into()), true).as_deref(), Some("B"));
        assert_eq!(normalize(&Some("   ".into()), true), None);
        assert_eq!(normalize(&None, true), None);
    }
}
