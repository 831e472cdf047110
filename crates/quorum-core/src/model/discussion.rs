use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DecisionId, DiscussionId, ReplyId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionKind {
    Pro,
    Con,
    Neutral,
    Question,
}

impl DiscussionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscussionKind::Pro => "pro",
            DiscussionKind::Con => "con",
            DiscussionKind::Neutral => "neutral",
            DiscussionKind::Question => "question",
        }
    }
}

impl fmt::Display for DiscussionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reply nested under a discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    pub id: ReplyId,
    pub discussion_id: DiscussionId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
}

impl Reply {
    pub fn new(
        discussion_id: DiscussionId,
        user_id: UserId,
        content: &str,
    ) -> Result<Self, ValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(Self {
            id: ReplyId::generate(),
            discussion_id,
            user_id,
            content: content.to_string(),
            created_at: Utc::now(),
            likes: 0,
        })
    }

    /// Bump the like counter and return the new count. Likes only go up.
    pub fn like(&mut self) -> u32 {
        self.likes += 1;
        self.likes
    }
}

/// A top-level comment on a decision, typed by the stance it takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discussion {
    pub id: DiscussionId,
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: DiscussionKind,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

impl Discussion {
    pub fn new(
        decision_id: DecisionId,
        user_id: UserId,
        content: &str,
        kind: DiscussionKind,
    ) -> Result<Self, ValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(Self {
            id: DiscussionId::generate(),
            decision_id,
            user_id,
            content: content.to_string(),
            kind,
            created_at: Utc::now(),
            likes: 0,
            replies: Vec::new(),
        })
    }

    /// Bump the like counter and return the new count. Likes only go up.
    pub fn like(&mut self) -> u32 {
        self.likes += 1;
        self.likes
    }
}
