//! Pure vote counting. The store delegates here so the fold can be
//! tested without any shared state.

use serde::{Deserialize, Serialize};

use crate::model::vote::{Vote, VoteOption};

/// Vote counts for one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub yes: usize,
    pub no: usize,
    pub maybe: usize,
}

/// Percentage share per option, each in the 0-100 range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteShares {
    pub yes: f64,
    pub no: f64,
    pub maybe: f64,
}

impl VoteTally {
    /// Count votes per option. The match is exhaustive over
    /// `VoteOption`, so every vote lands in exactly one bucket.
    pub fn from_votes(votes: &[Vote]) -> Self {
        let mut tally = VoteTally::default();
        for vote in votes {
            match vote.option {
                VoteOption::Yes => tally.yes += 1,
                VoteOption::No => tally.no += 1,
                VoteOption::Maybe => tally.maybe += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.yes + self.no + self.maybe
    }

    /// Percentage share per option. An empty tally reports all zeros,
    /// never NaN.
    pub fn percentages(&self) -> VoteShares {
        let total = self.total();
        if total == 0 {
            return VoteShares::default();
        }
        let share = |count: usize| count as f64 / total as f64 * 100.0;
        VoteShares {
            yes: share(self.yes),
            no: share(self.no),
            maybe: share(self.maybe),
        }
    }
}
