//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into relationship-level APIs.
//! - Expose derived queries through borrowed read views.

pub mod catalog_service;
pub mod views;
