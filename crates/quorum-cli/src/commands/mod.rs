pub mod create;
pub mod discuss;
pub mod insight;
pub mod like;
pub mod list;
pub mod reply;
pub mod show;
pub mod stats;
pub mod tally;
pub mod vote;

use std::time::Duration;

use quorum_insight::engine::{InsightConfig, InsightEngine};
use quorum_store::store::DecisionStore;

/// Fresh session over the demo dataset. Every invocation starts from
/// the same seeded board.
pub(crate) fn open_board() -> DecisionStore {
    DecisionStore::seeded(InsightEngine::new(InsightConfig::immediate()))
}

/// Synthesis delay: flag, then QUORUM_INSIGHT_DELAY_MS, then the
/// built-in default.
pub(crate) fn insight_config(delay_ms: Option<u64>) -> InsightConfig {
    let delay_ms = delay_ms.or_else(|| {
        std::env::var("QUORUM_INSIGHT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
    });
    match delay_ms {
        Some(ms) => InsightConfig {
            delay: Duration::from_millis(ms),
        },
        None => InsightConfig::default(),
    }
}
