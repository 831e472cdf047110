use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{DecisionId, InsightId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesized analysis attached to a decision when it is created. A
/// decision carries at most one, and it never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub id: InsightId,
    pub decision_id: DecisionId,
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub sentiment: Sentiment,
    /// Model confidence in the 0.0 to 1.0 range.
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
