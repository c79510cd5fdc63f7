//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record and the ordered list invariants.
//! - Own the JSON wire shape shared by every persistence backend.
//!
//! # Invariants
//! - Task ids are positive and pairwise distinct.
//! - Lists are replaced wholesale, never patched in place.

pub mod task;
