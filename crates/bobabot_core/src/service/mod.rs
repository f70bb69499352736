//! Application state and use-case orchestration.
//!
//! # Responsibility
//! - `context`: in-memory model facade shared by all commands.
//! - `logic`: parse/execute/save loop driven by front ends.

pub mod context;
pub mod logic;
