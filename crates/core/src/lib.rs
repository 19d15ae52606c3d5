//! MFC domain core.
//!
//! Pure domain logic with no I/O: shared types, the error taxonomy, search
//! suggestion assembly, form validation rules and status workflows. Used by
//! the repository layer, the HTTP API and the seed tooling alike.

pub mod employee;
pub mod error;
pub mod forms;
pub mod roles;
pub mod search;
pub mod snils;
pub mod status;
pub mod suggest;
pub mod types;
