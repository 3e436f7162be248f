// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- RBAC ---
        handlers::rbac::list_permissions,
        handlers::rbac::create_role,
        handlers::rbac::list_roles,
        handlers::rbac::get_role,
        handlers::rbac::delete_role,
        handlers::rbac::get_role_permissions,
        handlers::rbac::update_role_permissions,

        // --- Hostels ---
        handlers::hostels::create_hostel,
        handlers::hostels::list_hostels,
        handlers::hostels::get_hostel,
        handlers::hostels::update_hostel,
        handlers::hostels::delete_hostel,
        handlers::hostels::get_architecture,

        // --- Tenants ---
        handlers::tenants::create_tenant,
        handlers::tenants::list_tenants,
        handlers::tenants::get_tenant,
        handlers::tenants::update_tenant,
        handlers::tenants::delete_tenant,

        // --- Staff ---
        handlers::staff::create_staff,
        handlers::staff::create_manager,
        handlers::staff::list_staff,
        handlers::staff::list_managers,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::MeResponse,

            // --- RBAC ---
            models::rbac::PermissionResource,
            models::rbac::PermissionAction,
            models::rbac::AccessLevel,
            models::rbac::ResourcePermissions,
            models::rbac::PermissionForm,
            models::rbac::Role,
            models::rbac::Permission,
            models::rbac::CreateRolePayload,
            models::rbac::RoleResponse,

            // --- Hostels ---
            models::hostel::Hostel,
            models::hostel::HostelPayload,

            // --- Architecture ---
            models::architecture::Seat,
            models::architecture::Room,
            models::architecture::Floor,
            models::architecture::SeatConflict,
            models::architecture::ArchitectureData,
            models::architecture::HostelArchitecture,

            // --- Tenants ---
            models::tenant::TenantStatus,
            models::tenant::Tenant,
            models::tenant::TenantPayload,

            // --- Staff ---
            models::staff::StaffKind,
            models::staff::StaffMember,
            models::staff::StaffPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação"),
        (name = "Users", description = "Dados do Usuário e Permissões"),
        (name = "RBAC", description = "Controle de Acesso (Cargos e Permissões)"),
        (name = "Hostels", description = "Cadastro de Hostels e Arquitetura (andares, quartos, camas)"),
        (name = "Tenants", description = "Inquilinos"),
        (name = "Staff", description = "Funcionários e Gerentes"),
        (name = "Dashboard", description = "Indicadores Gerenciais")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
