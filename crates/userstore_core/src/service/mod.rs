//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Keep callers (CLI, tests) decoupled from storage details.

pub mod user_service;
