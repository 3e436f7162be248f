pub mod user_repo;
pub use user_repo::UserRepository;
pub mod hostel_repo;
pub use hostel_repo::HostelRepository;
pub mod tenant_repo;
pub use tenant_repo::TenantRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
pub mod rbac_repo;
pub use rbac_repo::RbacRepository;
