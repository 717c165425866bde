//! Repository layer abstractions and the in-memory registry.
//!
//! # Responsibility
//! - Define the storage contract the catalog service depends on.
//! - Keep registry bookkeeping (ordering, back-reference lists) out of the
//!   service layer.
//!
//! # Invariants
//! - Repository writes never validate field values; callers pass entities
//!   that were already constructed through validating constructors.

pub mod catalog_repo;
