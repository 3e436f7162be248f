// src/db/rbac_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::{map_unique_violation, AppError};
use crate::models::rbac::{Permission, Role};

#[derive(Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Criar o Cargo
    pub async fn create_role<'e, E>(
        &self,
        executor: E,
        name: &str,
        description: Option<&str>,
    ) -> Result<Role, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
            .bind(name)
            .bind(description)
            .fetch_one(executor)
            .await
            .map_err(|e| map_unique_violation(e, name))
    }

    pub async fn find_role(&self, id: Uuid) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_as::<_, Role>(
            "SELECT id, name, description, created_at, updated_at FROM roles WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_as::<_, Role>(
            "SELECT id, name, description, created_at, updated_at FROM roles WHERE name = $1",
        )
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles = sqlx::query_as::<_, Role>(
            "SELECT id, name, description, created_at, updated_at FROM roles ORDER BY name",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    /// O vínculo com role_permissions cai junto (ON DELETE CASCADE).
    pub async fn delete_role(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn touch_role<'e, E>(&self, executor: E, id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE roles SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // 2. IDs das permissões de um cargo
    pub async fn role_permission_ids(&self, role_id: Uuid) -> Result<Vec<i32>, AppError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT permission_id FROM role_permissions WHERE role_id = $1 ORDER BY permission_id",
        )
            .bind(role_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    // 3. Vincular Cargo <-> Permissão
    pub async fn assign_permissions<'e, E>(
        &self,
        executor: E,
        role_id: Uuid,
        permission_ids: &[i32],
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Inserção em massa usando UNNEST para performance
        sqlx::query(
            r#"
            INSERT INTO role_permissions (role_id, permission_id)
            SELECT $1, unnest($2::int4[])
            ON CONFLICT DO NOTHING
            "#,
        )
            .bind(role_id)
            .bind(permission_ids)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn clear_permissions<'e, E>(&self, executor: E, role_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM role_permissions WHERE role_id = $1")
            .bind(role_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    // 4. Listar todas as permissões (origem do catálogo carregado na inicialização)
    pub async fn list_all_permissions(&self) -> Result<Vec<Permission>, AppError> {
        let permissions = sqlx::query_as::<_, Permission>(
            "SELECT id, slug, description FROM permissions ORDER BY id",
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(permissions)
    }

    pub async fn user_has_permission(
        &self,
        user_id: Uuid,
        permission_slug: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM users u
                JOIN role_permissions rp ON u.role_id = rp.role_id
                JOIN permissions p ON rp.permission_id = p.id
                WHERE u.id = $1
                  AND p.slug = $2
            )
            "#,
        )
            .bind(user_id)
            .bind(permission_slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
