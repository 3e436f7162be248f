// src/handlers/rbac.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{
            PermRolesCreate, PermRolesDelete, PermRolesEdit, PermRolesViewList, PermRolesViewOne,
            RequirePermission,
        },
    },
    models::rbac::{CreateRolePayload, Permission, PermissionForm, Role, RoleResponse},
};

// POST /api/admin/role
#[utoipa::path(
    post,
    path = "/api/admin/role",
    tag = "RBAC",
    request_body = CreateRolePayload,
    responses(
        (status = 201, description = "Cargo criado", body = RoleResponse),
        (status = 409, description = "Já existe um cargo com esse nome")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_role(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesCreate>,
    Json(payload): Json<CreateRolePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let response = app_state
        .rbac_service
        .create_role_with_permissions(
            &payload.name,
            payload.description.as_deref(),
            &payload.permissions,
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(response)))
}

// GET /api/admin/role
#[utoipa::path(
    get,
    path = "/api/admin/role",
    tag = "RBAC",
    responses((status = 200, description = "Cargos cadastrados", body = Vec<Role>)),
    security(("api_jwt" = []))
)]
pub async fn list_roles(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesViewList>,
) -> Result<impl IntoResponse, ApiError> {
    let roles = app_state
        .rbac_service
        .list_roles()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(roles))
}

// GET /api/admin/role/{id}
#[utoipa::path(
    get,
    path = "/api/admin/role/{id}",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do Cargo")),
    responses(
        (status = 200, description = "Cargo e suas permissões", body = RoleResponse),
        (status = 404, description = "Cargo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_role(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesViewOne>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let role = app_state
        .rbac_service
        .get_role(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(role))
}

// DELETE /api/admin/role/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/role/{id}",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do Cargo")),
    responses(
        (status = 204, description = "Cargo removido"),
        (status = 404, description = "Cargo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_role(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesDelete>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .rbac_service
        .delete_role(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/admin/role/{id}/permissions
#[utoipa::path(
    get,
    path = "/api/admin/role/{id}/permissions",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do Cargo")),
    responses(
        (status = 200, description = "Matriz de permissões do cargo", body = PermissionForm),
        (status = 404, description = "Cargo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_role_permissions(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesViewOne>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let role = app_state
        .rbac_service
        .get_role(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(role.permissions))
}

// PUT /api/admin/role/{id}/permissions
#[utoipa::path(
    put,
    path = "/api/admin/role/{id}/permissions",
    tag = "RBAC",
    params(("id" = Uuid, Path, description = "ID do Cargo")),
    request_body = PermissionForm,
    responses(
        (status = 200, description = "Matriz salva (como ficou no banco)", body = PermissionForm),
        (status = 404, description = "Cargo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_role_permissions(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRolesEdit>,
    Path(id): Path<Uuid>,
    Json(form): Json<PermissionForm>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = app_state
        .rbac_service
        .update_role_permissions(id, &form)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(saved))
}

// GET /api/permissions (Para o frontend saber o que mostrar na tela de criação)
#[utoipa::path(
    get,
    path = "/api/permissions",
    tag = "RBAC",
    responses((status = 200, description = "Catálogo de permissões", body = Vec<Permission>))
)]
pub async fn list_permissions(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.rbac_service.list_system_permissions())
}
