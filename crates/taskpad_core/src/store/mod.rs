//! Task list state ownership.
//!
//! # Responsibility
//! - Hold the only authoritative copy of the task list.
//! - Persist and publish every mutation.

pub mod task_store;
