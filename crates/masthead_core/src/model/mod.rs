//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity types and their typed ids.
//! - Own field validation rules and the errors they produce.
//!
//! # Invariants
//! - Every entity is identified by a stable, randomly generated id.
//! - Entities never hold references to each other, only ids.

pub mod article;
pub mod author;
pub mod ids;
pub mod magazine;
pub mod validation;
