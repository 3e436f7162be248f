// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::rbac::{permission_slug, PermissionAction, PermissionResource},
};

/// 1. O Trait que define o que é uma Permissão
pub trait PermissionDef: Send + Sync + 'static {
    const RESOURCE: PermissionResource;
    const ACTION: PermissionAction;

    fn slug() -> String {
        permission_slug(Self::RESOURCE, Self::ACTION)
    }
}

/// 2. O Extractor (Guardião). Só funciona atrás do `auth_guard`.
pub struct RequirePermission<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let locale = Locale::from_headers(&parts.headers);
        let reject = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

        // A. Extrai Usuário
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| reject(AppError::InvalidToken))?;

        // B. Pega o slug da permissão
        let required_perm = T::slug();

        // C. Verifica no Banco
        let has_permission = app_state
            .rbac_repo
            .user_has_permission(user.0.id, &required_perm)
            .await
            .map_err(&reject)?;

        if !has_permission {
            tracing::debug!("Usuário {} sem a permissão '{}'", user.0.id, required_perm);
            return Err(reject(AppError::PermissionDenied(required_perm)));
        }

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

macro_rules! permission {
    ($name:ident, $resource:ident, $action:ident) => {
        pub struct $name;
        impl PermissionDef for $name {
            const RESOURCE: PermissionResource = PermissionResource::$resource;
            const ACTION: PermissionAction = PermissionAction::$action;
        }
    };
}

permission!(PermHostelsViewList, Hostels, ViewList);
permission!(PermHostelsViewOne, Hostels, ViewOne);
permission!(PermHostelsCreate, Hostels, Create);
permission!(PermHostelsEdit, Hostels, Edit);
permission!(PermHostelsDelete, Hostels, Delete);

permission!(PermTenantsViewList, Tenants, ViewList);
permission!(PermTenantsViewOne, Tenants, ViewOne);
permission!(PermTenantsCreate, Tenants, Create);
permission!(PermTenantsEdit, Tenants, Edit);
permission!(PermTenantsDelete, Tenants, Delete);

permission!(PermStaffViewList, Staff, ViewList);
permission!(PermStaffCreate, Staff, Create);

permission!(PermManagersViewList, Managers, ViewList);
permission!(PermManagersCreate, Managers, Create);

permission!(PermRolesViewList, Roles, ViewList);
permission!(PermRolesViewOne, Roles, ViewOne);
permission!(PermRolesCreate, Roles, Create);
permission!(PermRolesEdit, Roles, Edit);
permission!(PermRolesDelete, Roles, Delete);

permission!(PermRoomsViewList, Rooms, ViewList);
