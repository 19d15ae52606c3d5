//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access
//! methods that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod application_status_repo;
pub mod appointment_repo;
pub mod category_repo;
pub mod employee_repo;
pub mod news_repo;
pub mod office_repo;
pub mod office_service_repo;
pub mod service_repo;
pub mod stats_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use application_status_repo::ApplicationStatusRepo;
pub use appointment_repo::AppointmentRepo;
pub use category_repo::CategoryRepo;
pub use employee_repo::EmployeeRepo;
pub use news_repo::NewsRepo;
pub use office_repo::OfficeRepo;
pub use office_service_repo::OfficeServiceRepo;
pub use service_repo::ServiceRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
