// src/db/staff_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::{map_missing_reference, AppError},
    models::staff::{StaffKind, StaffMember, StaffPayload},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, kind: StaffKind, input: &StaffPayload) -> Result<StaffMember, AppError> {
        let member = sqlx::query_as::<_, StaffMember>(
            r#"
            INSERT INTO staff_members (hostel_id, name, phone, email, kind, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, hostel_id, name, phone, email, kind, position, created_at, updated_at
            "#,
        )
            .bind(input.hostel_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(kind)
            .bind(&input.position)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_missing_reference(e, "hostel"))?;

        Ok(member)
    }

    pub async fn list_by_kind(&self, kind: StaffKind) -> Result<Vec<StaffMember>, AppError> {
        let members = sqlx::query_as::<_, StaffMember>(
            r#"
            SELECT id, hostel_id, name, phone, email, kind, position, created_at, updated_at
            FROM staff_members
            WHERE kind = $1
            ORDER BY name
            "#,
        )
            .bind(kind)
            .fetch_all(&self.pool)
            .await?;

        Ok(members)
    }
}
