//! Canonical domain model for founder/investor/team projections.
//!
//! # Responsibility
//! - Define one record shape per entity used by core business logic.
//! - Keep mock fixtures and persisted rows on the same shape.
//!
//! # Invariants
//! - Every listable record carries an opaque string id unique in its collection.
//! - Enumerated attributes round-trip through `as_str`/`parse` without loss.

pub mod catalog;
pub mod identity;
pub mod investment;
pub mod investor;
pub mod milestone;
pub mod money;
pub mod pitch;
pub mod startup;
pub mod task;
pub mod team;
pub mod validation;
