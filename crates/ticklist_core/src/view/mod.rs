//! View-layer state and derived projections.
//!
//! # Responsibility
//! - Define the filter predicate and the derived visible-task view.
//! - Hold purely presentational state (current filter, drafts, in-flight
//!   edit) with no business rules of its own.
//!
//! # Invariants
//! - Derived views never reorder the underlying collection.
//! - Footer counts are computed from the full, unfiltered collection.

pub mod filter;
pub mod state;
