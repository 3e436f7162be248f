// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{PermHostelsViewList, RequirePermission},
    },
    models::dashboard::DashboardSummary,
};

// GET /api/admin/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Hostels, inquilinos por status e ocupação geral", body = DashboardSummary),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem permissão")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    _perm: RequirePermission<PermHostelsViewList>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .dashboard_service
        .get_summary()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(summary)))
}
