//! In-memory decision board. One `DecisionStore` handle per process (or
//! per test), cheaply cloned and shared across tasks.

pub mod error;
pub mod query;
pub mod seed;
pub mod store;
