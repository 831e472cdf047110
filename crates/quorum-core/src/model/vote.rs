use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DecisionId, UserId, VoteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOption {
    Yes,
    No,
    Maybe,
}

impl VoteOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteOption::Yes => "yes",
            VoteOption::No => "no",
            VoteOption::Maybe => "maybe",
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cast vote. Confidence is the voter's own 1-10 assessment of
/// how sure they are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vote {
    pub id: VoteId,
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub option: VoteOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub confidence: u8,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Record a vote cast right now. Confidence outside 1-10 is rejected.
    pub fn new(
        user_id: UserId,
        decision_id: DecisionId,
        option: VoteOption,
        reasoning: Option<String>,
        confidence: u8,
    ) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            id: VoteId::generate(),
            user_id,
            decision_id,
            option,
            reasoning,
            confidence,
            created_at: Utc::now(),
        })
    }
}
