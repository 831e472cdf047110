//! The in-memory decision board. One lock guards the whole board;
//! insight synthesis runs before the lock is taken, and an abandoned
//! `create` leaves the board untouched.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quorum_core::id::{DecisionId, DiscussionId, ReplyId, UserId};
use quorum_core::model::{
    Decision, DecisionDraft, DecisionStatus, Discussion, DiscussionKind, Reply, Vote, VoteOption,
};
use quorum_core::tally::VoteTally;
use quorum_insight::engine::InsightEngine;

use crate::error::StoreError;
use crate::query::DecisionFilter;
use crate::seed;

/// Shared handle to one decision board. Clones share the same board.
#[derive(Debug, Clone)]
pub struct DecisionStore {
    decisions: Arc<RwLock<Vec<Decision>>>,
    engine: InsightEngine,
}

/// Headline counters for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub decisions: usize,
    pub active: usize,
    pub mine: usize,
    pub votes: usize,
    pub discussions: usize,
}

impl DecisionStore {
    /// An empty board.
    pub fn new(engine: InsightEngine) -> Self {
        Self {
            decisions: Arc::new(RwLock::new(Vec::new())),
            engine,
        }
    }

    /// A board pre-populated with the demo dataset.
    pub fn seeded(engine: InsightEngine) -> Self {
        Self {
            decisions: Arc::new(RwLock::new(seed::demo_decisions())),
            engine,
        }
    }

    /// Validate a draft, synthesize its insight and commit it to the
    /// front of the board. The decision is fully assembled, with its
    /// `created_at` stamp and deadline check, before synthesis starts;
    /// the insert is the only commit point, so dropping this future
    /// mid-synthesis publishes nothing.
    pub async fn create(
        &self,
        draft: DecisionDraft,
        created_by: &UserId,
    ) -> Result<Decision, StoreError> {
        let mut decision = Decision::from_draft(draft, created_by.clone())?;
        let content = self
            .engine
            .synthesize(decision.category, &decision.title, &decision.description)
            .await;
        decision.insight = Some(content.attach(decision.id.clone()));
        {
            let mut decisions = self.decisions.write();
            decisions.insert(0, decision.clone());
        }
        info!(id = %decision.id, category = %decision.category, "decision created");
        Ok(decision)
    }

    /// All decisions the filter admits, newest first.
    pub fn list(&self, filter: &DecisionFilter) -> Vec<Decision> {
        let decisions = self.decisions.read();
        decisions
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &DecisionId) -> Result<Decision, StoreError> {
        let decisions = self.decisions.read();
        decisions
            .iter()
            .find(|d| &d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::DecisionNotFound(id.to_string()))
    }

    /// Record a vote. A user votes at most once per decision; voting
    /// again replaces the earlier ballot wholesale, fresh id and all.
    pub fn cast_vote(
        &self,
        decision_id: &DecisionId,
        user_id: &UserId,
        option: VoteOption,
        reasoning: Option<String>,
        confidence: u8,
    ) -> Result<Vote, StoreError> {
        let vote = Vote::new(
            user_id.clone(),
            decision_id.clone(),
            option,
            reasoning,
            confidence,
        )?;
        {
            let mut decisions = self.decisions.write();
            let decision = find_decision_mut(&mut decisions, decision_id)?;
            match decision.votes.iter_mut().find(|v| &v.user_id == user_id) {
                Some(previous) => *previous = vote.clone(),
                None => decision.votes.push(vote.clone()),
            }
        }
        info!(decision = %decision_id, user = %user_id, option = %vote.option, "vote recorded");
        Ok(vote)
    }

    pub fn tally(&self, decision_id: &DecisionId) -> Result<VoteTally, StoreError> {
        Ok(VoteTally::from_votes(&self.get(decision_id)?.votes))
    }

    pub fn add_discussion(
        &self,
        decision_id: &DecisionId,
        user_id: &UserId,
        content: &str,
        kind: DiscussionKind,
    ) -> Result<Discussion, StoreError> {
        let discussion = Discussion::new(decision_id.clone(), user_id.clone(), content, kind)?;
        {
            let mut decisions = self.decisions.write();
            let decision = find_decision_mut(&mut decisions, decision_id)?;
            decision.discussions.push(discussion.clone());
        }
        info!(decision = %decision_id, user = %user_id, kind = %discussion.kind, "discussion added");
        Ok(discussion)
    }

    pub fn add_reply(
        &self,
        decision_id: &DecisionId,
        discussion_id: &DiscussionId,
        user_id: &UserId,
        content: &str,
    ) -> Result<Reply, StoreError> {
        let reply = Reply::new(discussion_id.clone(), user_id.clone(), content)?;
        {
            let mut decisions = self.decisions.write();
            let decision = find_decision_mut(&mut decisions, decision_id)?;
            let discussion = find_discussion_mut(decision, discussion_id)?;
            discussion.replies.push(reply.clone());
        }
        debug!(decision = %decision_id, discussion = %discussion_id, "reply added");
        Ok(reply)
    }

    /// Like a discussion and return its new count.
    pub fn like_discussion(
        &self,
        decision_id: &DecisionId,
        discussion_id: &DiscussionId,
    ) -> Result<u32, StoreError> {
        let mut decisions = self.decisions.write();
        let decision = find_decision_mut(&mut decisions, decision_id)?;
        let discussion = find_discussion_mut(decision, discussion_id)?;
        Ok(discussion.like())
    }

    /// Like a reply and return its new count.
    pub fn like_reply(
        &self,
        decision_id: &DecisionId,
        discussion_id: &DiscussionId,
        reply_id: &ReplyId,
    ) -> Result<u32, StoreError> {
        let mut decisions = self.decisions.write();
        let decision = find_decision_mut(&mut decisions, decision_id)?;
        let discussion = find_discussion_mut(decision, discussion_id)?;
        discussion
            .replies
            .iter_mut()
            .find(|r| &r.id == reply_id)
            .map(|r| r.like())
            .ok_or_else(|| StoreError::ReplyNotFound(reply_id.to_string()))
    }

    pub fn stats(&self, viewer: &UserId) -> StoreStats {
        let decisions = self.decisions.read();
        StoreStats {
            decisions: decisions.len(),
            active: decisions
                .iter()
                .filter(|d| d.status == DecisionStatus::Active)
                .count(),
            mine: decisions.iter().filter(|d| &d.created_by == viewer).count(),
            votes: decisions.iter().map(|d| d.votes.len()).sum(),
            discussions: decisions.iter().map(|d| d.discussions.len()).sum(),
        }
    }
}

fn find_decision_mut<'a>(
    decisions: &'a mut [Decision],
    id: &DecisionId,
) -> Result<&'a mut Decision, StoreError> {
    decisions
        .iter_mut()
        .find(|d| &d.id == id)
        .ok_or_else(|| StoreError::DecisionNotFound(id.to_string()))
}

fn find_discussion_mut<'a>(
    decision: &'a mut Decision,
    id: &DiscussionId,
) -> Result<&'a mut Discussion, StoreError> {
    decision
        .discussions
        .iter_mut()
        .find(|d| &d.id == id)
        .ok_or_else(|| StoreError::DiscussionNotFound(id.to_string()))
}
