// src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use crate::config::{AppState, Config};

use crate::middleware::auth::auth_guard;

/// Monta o roteador completo da API.
pub fn create_app(app_state: AppState) -> Router {
    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login));

    // Define as rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Todas exigem JWT; cada handler ainda exige a sua permissão
    let admin_routes = Router::new()
        .route("/role"
               ,post(handlers::rbac::create_role)
               .get(handlers::rbac::list_roles)
        )
        .route("/role/{id}"
               ,get(handlers::rbac::get_role)
               .delete(handlers::rbac::delete_role)
        )
        .route("/role/{id}/permissions"
               ,get(handlers::rbac::get_role_permissions)
               .put(handlers::rbac::update_role_permissions)
        )
        .route("/hostels"
               ,post(handlers::hostels::create_hostel)
               .get(handlers::hostels::list_hostels)
        )
        .route("/hostels/{id}"
               ,get(handlers::hostels::get_hostel)
               .put(handlers::hostels::update_hostel)
               .delete(handlers::hostels::delete_hostel)
        )
        .route("/hostels/{id}/architecture"
               ,get(handlers::hostels::get_architecture)
        )
        .route("/tenants"
               ,post(handlers::tenants::create_tenant)
        )
        .route("/tenants/{id}"
               ,get(handlers::tenants::get_tenant)
               .put(handlers::tenants::update_tenant)
               .delete(handlers::tenants::delete_tenant)
        )
        .route("/staff", post(handlers::staff::create_staff))
        .route("/managers", post(handlers::staff::create_manager))
        .route("/table/tenants", get(handlers::tenants::list_tenants))
        .route("/table/staff", get(handlers::staff::list_staff))
        .route("/table/managers", get(handlers::staff::list_managers))
        .route("/dashboard/summary", get(handlers::dashboard::get_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/permissions", get(handlers::rbac::list_permissions))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/admin", admin_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state)
}
