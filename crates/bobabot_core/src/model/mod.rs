//! Customer domain model.
//!
//! # Responsibility
//! - Define validated customer fields and the customer record.
//! - Keep the uniqueness-enforcing registry and its undo/redo history.
//!
//! # Invariants
//! - Every stored field value passed its validation rule.
//! - The registry never holds two customers sharing phone or email.

pub mod customer;
pub mod fields;
pub mod registry;
pub mod sample;
pub mod versioned;
