// src/db/hostel_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::{map_unique_violation, AppError},
    models::hostel::{Hostel, HostelPayload},
};

const HOSTEL_COLUMNS: &str = r#"
    id, name, address_line, city, state, postal_code,
    total_floors, rooms_per_floor,
    manager_name, manager_phone, manager_email,
    created_at, updated_at
"#;

#[derive(Clone)]
pub struct HostelRepository {
    pool: PgPool,
}

impl HostelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &HostelPayload) -> Result<Hostel, AppError> {
        let sql = format!(
            r#"
            INSERT INTO hostels (
                name, address_line, city, state, postal_code,
                total_floors, rooms_per_floor,
                manager_name, manager_phone, manager_email
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {HOSTEL_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Hostel>(&sql)
            .bind(&input.name)
            .bind(&input.address_line)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.postal_code)
            .bind(input.total_floors)
            .bind(input.rooms_per_floor)
            .bind(&input.manager_name)
            .bind(&input.manager_phone)
            .bind(&input.manager_email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, input.name.clone()))
    }

    pub async fn list(&self) -> Result<Vec<Hostel>, AppError> {
        let sql = format!("SELECT {HOSTEL_COLUMNS} FROM hostels ORDER BY name");
        let hostels = sqlx::query_as::<_, Hostel>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(hostels)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Hostel>, AppError> {
        let sql = format!("SELECT {HOSTEL_COLUMNS} FROM hostels WHERE id = $1");
        let hostel = sqlx::query_as::<_, Hostel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(hostel)
    }

    // Substituição completa, como no formulário de edição
    pub async fn update(&self, id: Uuid, input: &HostelPayload) -> Result<Option<Hostel>, AppError> {
        let sql = format!(
            r#"
            UPDATE hostels SET
                name = $2, address_line = $3, city = $4, state = $5, postal_code = $6,
                total_floors = $7, rooms_per_floor = $8,
                manager_name = $9, manager_phone = $10, manager_email = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {HOSTEL_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Hostel>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address_line)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.postal_code)
            .bind(input.total_floors)
            .bind(input.rooms_per_floor)
            .bind(&input.manager_name)
            .bind(&input.manager_phone)
            .bind(&input.manager_email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, input.name.clone()))
    }

    /// Os inquilinos e funcionários ficam sem hostel (ON DELETE SET NULL).
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hostels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
