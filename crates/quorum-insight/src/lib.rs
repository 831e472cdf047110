//! Canned insight synthesis: static per-category analysis tables served
//! through an async engine with a simulated processing delay.

pub mod engine;
pub mod templates;
