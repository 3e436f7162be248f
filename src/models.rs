pub mod architecture;
pub mod auth;
pub mod dashboard;
pub mod hostel;
pub mod rbac;
pub mod staff;
pub mod tenant;
