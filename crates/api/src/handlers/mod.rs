//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the repositories in `mfc_db`, and
//! map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod applications;
pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod home;
pub mod search;
pub mod workflow;
