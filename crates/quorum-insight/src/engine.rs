use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use quorum_core::id::{DecisionId, InsightId};
use quorum_core::model::{Category, Insight, Sentiment};

use crate::templates;

/// Synthesizer tunables. The delay stands in for model latency; nothing
/// else varies between runs.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub delay: Duration,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
        }
    }
}

impl InsightConfig {
    /// No artificial delay. Used by tests and scripted runs.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

/// Everything one synthesis run produces, not yet attached to a
/// decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightContent {
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}

impl InsightContent {
    /// Stamp the content into an `Insight` owned by `decision_id`.
    pub fn attach(self, decision_id: DecisionId) -> Insight {
        Insight {
            id: InsightId::generate(),
            decision_id,
            summary: self.summary,
            pros: self.pros,
            cons: self.cons,
            sentiment: self.sentiment,
            confidence: self.confidence,
            recommendations: self.recommendations,
            generated_at: Utc::now(),
        }
    }
}

/// Template-driven stand-in for a real analysis model. Output depends
/// only on the category, so repeated runs are byte-identical.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Produce the canned analysis for one decision. Title and
    /// description are part of the call shape a real model would need;
    /// here they are only logged. Synthesis cannot fail, and dropping
    /// the future before the delay elapses leaves no trace anywhere.
    pub async fn synthesize(
        &self,
        category: Category,
        title: &str,
        description: &str,
    ) -> InsightContent {
        debug!(%category, title, description, "synthesizing insight");
        tokio::time::sleep(self.config.delay).await;
        let content = InsightContent {
            summary: templates::summary(category),
            pros: to_strings(templates::pros(category)),
            cons: to_strings(templates::cons(category)),
            sentiment: Sentiment::Neutral,
            confidence: 0.8,
            recommendations: to_strings(templates::recommendations(category)),
        };
        debug!(%category, "insight ready");
        content
    }
}

fn to_strings(table: [&str; 4]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}
