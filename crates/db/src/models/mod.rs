//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Joined read models used by the catalog and detail endpoints
//! - `Deserialize` create/update DTOs, validated with `validator` derives

pub mod application;
pub mod application_status;
pub mod appointment;
pub mod category;
pub mod employee;
pub mod news;
pub mod office;
pub mod office_service;
pub mod service;
pub mod stats;
pub mod user;
pub mod user_profile;
