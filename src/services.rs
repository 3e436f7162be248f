pub mod architecture_service;
pub mod auth;
pub mod dashboard_service;
pub mod permission_catalog;
pub mod rbac_service;
