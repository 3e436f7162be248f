// src/services/rbac_service.rs

use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::RbacRepository;
use crate::models::rbac::{Permission, PermissionForm, Role, RoleResponse};
use crate::services::permission_catalog::PermissionCatalog;

#[derive(Clone)]
pub struct RbacService {
    repo: RbacRepository,
    pool: PgPool,
    catalog: Arc<PermissionCatalog>,
}

impl RbacService {
    pub fn new(repo: RbacRepository, pool: PgPool, catalog: Arc<PermissionCatalog>) -> Self {
        Self { repo, pool, catalog }
    }

    pub async fn create_role_with_permissions(
        &self,
        name: &str,
        description: Option<&str>,
        form: &PermissionForm,
    ) -> Result<RoleResponse, AppError> {
        // 1. Formulário -> IDs do catálogo
        let permission_ids = self.catalog.extract_permission_ids(form);

        // 2. Inicia Transação
        let mut tx = self.pool.begin().await?;

        // 3. Cria o Cargo
        let role = self.repo.create_role(&mut *tx, name, description).await?;

        // 4. Salva o Vínculo
        if !permission_ids.is_empty() {
            self.repo.assign_permissions(&mut *tx, role.id, &permission_ids).await?;
        }

        // 5. Commit
        tx.commit().await?;

        tracing::info!(
            "Cargo '{}' criado com {} permissão(ões)",
            role.name,
            permission_ids.len()
        );

        Ok(RoleResponse {
            role,
            permissions: self.catalog.map_permissions_to_form(&permission_ids),
        })
    }

    pub async fn get_role(&self, id: Uuid) -> Result<RoleResponse, AppError> {
        let role = self.repo.find_role(id).await?.ok_or(AppError::NotFound("role"))?;
        let permissions = self.role_permissions(role.id).await?;
        Ok(RoleResponse { role, permissions })
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        self.repo.list_roles().await
    }

    pub async fn delete_role(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete_role(id).await? {
            return Err(AppError::NotFound("role"));
        }
        tracing::info!("Cargo {} removido", id);
        Ok(())
    }

    /// O formulário de permissões de um cargo.
    pub async fn role_permissions(&self, role_id: Uuid) -> Result<PermissionForm, AppError> {
        let ids = self.repo.role_permission_ids(role_id).await?;
        Ok(self.catalog.map_permissions_to_form(&ids))
    }

    /// Substitui todo o conjunto de permissões do cargo pelo do formulário.
    pub async fn update_role_permissions(
        &self,
        role_id: Uuid,
        form: &PermissionForm,
    ) -> Result<PermissionForm, AppError> {
        let permission_ids = self.catalog.extract_permission_ids(form);

        let mut tx = self.pool.begin().await?;

        if !self.repo.touch_role(&mut *tx, role_id).await? {
            return Err(AppError::NotFound("role"));
        }
        self.repo.clear_permissions(&mut *tx, role_id).await?;
        if !permission_ids.is_empty() {
            self.repo.assign_permissions(&mut *tx, role_id, &permission_ids).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Permissões do cargo {} atualizadas: {:?}",
            role_id,
            self.catalog.granted_slugs(form)
        );

        Ok(self.catalog.map_permissions_to_form(&permission_ids))
    }

    pub fn list_system_permissions(&self) -> Vec<Permission> {
        self.catalog.entries().to_vec()
    }
}
