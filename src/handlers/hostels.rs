// src/handlers/hostels.rs

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
            PermHostelsCreate, PermHostelsDelete, PermHostelsEdit, PermHostelsViewList,
            PermHostelsViewOne, PermRoomsViewList, RequirePermission,
        },
    },
    models::{
        architecture::HostelArchitecture,
        hostel::{Hostel, HostelPayload},
    },
};

// POST /api/admin/hostels
#[utoipa::path(
    post,
    path = "/api/admin/hostels",
    tag = "Hostels",
    request_body = HostelPayload,
    responses(
        (status = 201, description = "Hostel criado", body = Hostel),
        (status = 400, description = "Payload inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_hostel(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsCreate>,
    Json(payload): Json<HostelPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let hostel = app_state
        .hostel_repo
        .create(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("🏨 Hostel '{}' criado ({})", hostel.name, hostel.id);
    Ok((StatusCode::CREATED, Json(hostel)))
}

// GET /api/admin/hostels
#[utoipa::path(
    get,
    path = "/api/admin/hostels",
    tag = "Hostels",
    responses((status = 200, description = "Hostels cadastrados", body = Vec<Hostel>)),
    security(("api_jwt" = []))
)]
pub async fn list_hostels(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsViewList>,
) -> Result<impl IntoResponse, ApiError> {
    let hostels = app_state
        .hostel_repo
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(hostels))
}

// GET /api/admin/hostels/{id}
#[utoipa::path(
    get,
    path = "/api/admin/hostels/{id}",
    tag = "Hostels",
    params(("id" = Uuid, Path, description = "ID do Hostel")),
    responses(
        (status = 200, description = "Hostel", body = Hostel),
        (status = 404, description = "Hostel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_hostel(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsViewOne>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let hostel = app_state
        .hostel_repo
        .find_by_id(id)
        .await
        .and_then(|h| h.ok_or(AppError::NotFound("hostel")))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(hostel))
}

// PUT /api/admin/hostels/{id}
#[utoipa::path(
    put,
    path = "/api/admin/hostels/{id}",
    tag = "Hostels",
    params(("id" = Uuid, Path, description = "ID do Hostel")),
    request_body = HostelPayload,
    responses(
        (status = 200, description = "Hostel atualizado", body = Hostel),
        (status = 404, description = "Hostel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_hostel(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsEdit>,
    Path(id): Path<Uuid>,
    Json(payload): Json<HostelPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let hostel = app_state
        .hostel_repo
        .update(id, &payload)
        .await
        .and_then(|h| h.ok_or(AppError::NotFound("hostel")))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(hostel))
}

// DELETE /api/admin/hostels/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/hostels/{id}",
    tag = "Hostels",
    params(("id" = Uuid, Path, description = "ID do Hostel")),
    responses(
        (status = 204, description = "Hostel removido"),
        (status = 404, description = "Hostel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_hostel(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsDelete>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .hostel_repo
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NotFound("hostel").to_api_error(&locale, &app_state.i18n_store));
    }

    tracing::info!("Hostel {} removido", id);
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/admin/hostels/{id}/architecture
#[utoipa::path(
    get,
    path = "/api/admin/hostels/{id}/architecture",
    tag = "Hostels",
    params(("id" = Uuid, Path, description = "ID do Hostel")),
    responses(
        (status = 200, description = "Andares, quartos, camas e ocupação", body = HostelArchitecture),
        (status = 404, description = "Hostel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_architecture(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermRoomsViewList>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let architecture = app_state
        .architecture_service
        .get_hostel_architecture(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(architecture))
}
