// src/handlers/staff.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{
            PermManagersCreate, PermManagersViewList, PermStaffCreate, PermStaffViewList,
            RequirePermission,
        },
    },
    models::staff::{StaffKind, StaffMember, StaffPayload},
};

// Funcionários e gerentes só diferem no `kind` gravado
async fn create_member(
    app_state: &AppState,
    locale: &Locale,
    kind: StaffKind,
    payload: StaffPayload,
) -> Result<StaffMember, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(locale, &app_state.i18n_store))?;

    app_state
        .staff_repo
        .create(kind, &payload)
        .await
        .map_err(|e| e.to_api_error(locale, &app_state.i18n_store))
}

// POST /api/admin/staff
#[utoipa::path(
    post,
    path = "/api/admin/staff",
    tag = "Staff",
    request_body = StaffPayload,
    responses((status = 201, description = "Funcionário cadastrado", body = StaffMember)),
    security(("api_jwt" = []))
)]
pub async fn create_staff(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermStaffCreate>,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let member = create_member(&app_state, &locale, StaffKind::Staff, payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// POST /api/admin/managers
#[utoipa::path(
    post,
    path = "/api/admin/managers",
    tag = "Staff",
    request_body = StaffPayload,
    responses((status = 201, description = "Gerente cadastrado", body = StaffMember)),
    security(("api_jwt" = []))
)]
pub async fn create_manager(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermManagersCreate>,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let member = create_member(&app_state, &locale, StaffKind::Manager, payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// GET /api/admin/table/staff
#[utoipa::path(
    get,
    path = "/api/admin/table/staff",
    tag = "Staff",
    responses((status = 200, description = "Tabela de funcionários", body = Vec<StaffMember>)),
    security(("api_jwt" = []))
)]
pub async fn list_staff(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermStaffViewList>,
) -> Result<impl IntoResponse, ApiError> {
    let members = app_state
        .staff_repo
        .list_by_kind(StaffKind::Staff)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(members))
}

// GET /api/admin/table/managers
#[utoipa::path(
    get,
    path = "/api/admin/table/managers",
    tag = "Staff",
    responses((status = 200, description = "Tabela de gerentes", body = Vec<StaffMember>)),
    security(("api_jwt" = []))
)]
pub async fn list_managers(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermManagersViewList>,
) -> Result<impl IntoResponse, ApiError> {
    let members = app_state
        .staff_repo
        .list_by_kind(StaffKind::Manager)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(members))
}
