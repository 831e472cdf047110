//! Filters applied when listing the board.

use quorum_core::id::UserId;
use quorum_core::model::{Decision, DecisionStatus};

/// Which slice of the board a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionFilter {
    /// Every decision, regardless of status or owner.
    All,
    /// Only decisions still open for voting.
    Active,
    /// Only decisions created by the given user.
    Mine(UserId),
}

impl DecisionFilter {
    /// Parse a filter name as shown on the dashboard tabs, ignoring
    /// case and surrounding whitespace. `mine` needs a viewer to
    /// compare owners against.
    pub fn parse(value: &str, viewer: &UserId) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" => Some(DecisionFilter::All),
            "active" => Some(DecisionFilter::Active),
            "mine" | "my-decisions" => Some(DecisionFilter::Mine(viewer.clone())),
            _ => None,
        }
    }

    pub fn matches(&self, decision: &Decision) -> bool {
        match self {
            DecisionFilter::All => true,
            DecisionFilter::Active => decision.status == DecisionStatus::Active,
            DecisionFilter::Mine(user_id) => &decision.created_by == user_id,
        }
    }
}
