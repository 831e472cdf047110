//! Domain model for the quorum decision board: decisions, votes,
//! discussion threads, synthesized insights, and the validation rules
//! that guard them. No I/O lives here.

pub mod error;
pub mod id;
pub mod model;
pub mod tally;
