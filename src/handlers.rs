pub mod auth;
pub mod dashboard;
pub mod hostels;
pub mod rbac;
pub mod staff;
pub mod tenants;
