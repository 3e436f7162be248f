// src/handlers/tenants.rs

use axum::{
    extract::{Path, Query, State},
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
            PermTenantsCreate, PermTenantsDelete, PermTenantsEdit, PermTenantsViewList,
            PermTenantsViewOne, RequirePermission,
        },
    },
    models::tenant::{Tenant, TenantFilter, TenantPayload},
};

// POST /api/admin/tenants
#[utoipa::path(
    post,
    path = "/api/admin/tenants",
    tag = "Tenants",
    request_body = TenantPayload,
    responses(
        (status = 201, description = "Inquilino cadastrado", body = Tenant),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tenant(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermTenantsCreate>,
    Json(payload): Json<TenantPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let tenant = app_state
        .tenant_repo
        .create(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(tenant)))
}

// GET /api/admin/table/tenants
#[utoipa::path(
    get,
    path = "/api/admin/table/tenants",
    tag = "Tenants",
    params(TenantFilter),
    responses((status = 200, description = "Tabela de inquilinos", body = Vec<Tenant>)),
    security(("api_jwt" = []))
)]
pub async fn list_tenants(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermTenantsViewList>,
    Query(filter): Query<TenantFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let tenants = app_state
        .tenant_repo
        .list(&filter)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(tenants))
}

// GET /api/admin/tenants/{id}
#[utoipa::path(
    get,
    path = "/api/admin/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "ID do Inquilino")),
    responses(
        (status = 200, description = "Inquilino", body = Tenant),
        (status = 404, description = "Inquilino não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_tenant(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermTenantsViewOne>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tenant = app_state
        .tenant_repo
        .find_by_id(id)
        .await
        .and_then(|t| t.ok_or(AppError::NotFound("tenant")))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(tenant))
}

// PUT /api/admin/tenants/{id}
#[utoipa::path(
    put,
    path = "/api/admin/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "ID do Inquilino")),
    request_body = TenantPayload,
    responses(
        (status = 200, description = "Inquilino atualizado", body = Tenant),
        (status = 404, description = "Inquilino não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_tenant(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermTenantsEdit>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TenantPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let tenant = app_state
        .tenant_repo
        .update(id, &payload)
        .await
        .and_then(|t| t.ok_or(AppError::NotFound("tenant")))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(tenant))
}

// DELETE /api/admin/tenants/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "ID do Inquilino")),
    responses(
        (status = 204, description = "Inquilino removido"),
        (status = 404, description = "Inquilino não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_tenant(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermTenantsDelete>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .tenant_repo
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound("tenant").to_api_error(&locale, &app_state.i18n_store));
    }

    Ok(StatusCode::NO_CONTENT)
}
