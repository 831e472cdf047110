use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DecisionId, UserId};
use crate::model::category::Category;
use crate::model::discussion::Discussion;
use crate::model::insight::Insight;
use crate::model::vote::Vote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Active,
    Closed,
    Draft,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Active => "active",
            DecisionStatus::Closed => "closed",
            DecisionStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw creation input exactly as a presentation layer collects it.
/// Nothing in here is trusted until `Decision::from_draft` validates
/// and normalizes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DecisionDraft {
    pub title: String,
    pub description: String,
    /// Raw category name; unknown values degrade to personal.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: String,
}

impl DecisionDraft {
    /// The checks that must pass before any other work starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// A decision under community deliberation. It owns its votes,
/// discussions and insight; every child's `decision_id` matches `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub id: DecisionId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub status: DecisionStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub votes: Vec<Vote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discussions: Vec<Discussion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<Insight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Decision {
    /// Assemble a validated decision from raw input. `created_at` is the
    /// moment of this call; a deadline earlier than that is rejected.
    /// The decision starts active with no votes, discussions or insight.
    pub fn from_draft(draft: DecisionDraft, created_by: UserId) -> Result<Self, ValidationError> {
        draft.validate()?;
        let created_at = Utc::now();
        if let Some(deadline) = draft.deadline {
            if deadline < created_at {
                return Err(ValidationError::DeadlineBeforeCreation {
                    deadline,
                    created_at,
                });
            }
        }
        Ok(Self {
            id: DecisionId::generate(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: Category::parse_lossy(&draft.category),
            created_by,
            created_at,
            deadline: draft.deadline,
            status: DecisionStatus::Active,
            votes: Vec::new(),
            discussions: Vec::new(),
            insight: None,
            tags: normalize_tags(&draft.tags),
        })
    }

    /// True when the decision was created within the 24 hours before
    /// `now`. Drives the "new" marker in listings.
    pub fn is_new_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) < Duration::hours(24)
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping
/// blanks and duplicates while keeping first-seen order.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> DecisionDraft {
        DecisionDraft {
            title: "Adopt a four day week?".into(),
            description: "Trial it for one quarter across the whole team".into(),
            category: "business".into(),
            deadline: None,
            tags: "work, schedule".into(),
        }
    }

    #[test]
    fn from_draft_builds_active_empty_decision() {
        let decision = Decision::from_draft(sample_draft(), UserId::from("1")).unwrap();
        assert_eq!(decision.status, DecisionStatus::Active);
        assert_eq!(decision.category, Category::Business);
        assert_eq!(decision.created_by, UserId::from("1"));
        assert!(decision.votes.is_empty());
        assert!(decision.discussions.is_empty());
        assert!(decision.insight.is_none());
        assert_eq!(decision.tags, vec!["work", "schedule"]);
    }

    #[test]
    fn from_draft_rejects_empty_title() {
        let draft = DecisionDraft {
            title: "   ".into(),
            ..sample_draft()
        };
        assert!(matches!(
            Decision::from_draft(draft, UserId::from("1")),
            Err(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn from_draft_rejects_empty_description() {
        let draft = DecisionDraft {
            description: String::new(),
            ..sample_draft()
        };
        assert!(matches!(
            Decision::from_draft(draft, UserId::from("1")),
            Err(ValidationError::EmptyDescription)
        ));
    }

    #[test]
    fn from_draft_rejects_deadline_in_the_past() {
        let draft = DecisionDraft {
            deadline: Some(Utc::now() - Duration::days(1)),
            ..sample_draft()
        };
        assert!(matches!(
            Decision::from_draft(draft, UserId::from("1")),
            Err(ValidationError::DeadlineBeforeCreation { .. })
        ));
    }

    #[test]
    fn from_draft_accepts_future_deadline() {
        let deadline = Utc::now() + Duration::days(30);
        let draft = DecisionDraft {
            deadline: Some(deadline),
            ..sample_draft()
        };
        let decision = Decision::from_draft(draft, UserId::from("1")).unwrap();
        assert_eq!(decision.deadline, Some(deadline));
    }

    #[test]
    fn unknown_category_degrades_to_personal() {
        let draft = DecisionDraft {
            category: "interplanetary".into(),
            ..sample_draft()
        };
        let decision = Decision::from_draft(draft, UserId::from("1")).unwrap();
        assert_eq!(decision.category, Category::Personal);
    }

    #[test]
    fn normalize_tags_strips_blanks_and_duplicates() {
        let tags = normalize_tags("career, startup , ,career,  big-tech");
        assert_eq!(tags, vec!["career", "startup", "big-tech"]);
    }

    #[test]
    fn normalize_tags_empty_input() {
        assert!(normalize_tags("").is_empty());
        assert!(normalize_tags(" , ,,").is_empty());
    }

    #[test]
    fn is_new_within_24_hours() {
        let decision = Decision::from_draft(sample_draft(), UserId::from("1")).unwrap();
        let now = decision.created_at;
        assert!(decision.is_new_at(now + Duration::hours(23)));
        assert!(!decision.is_new_at(now + Duration::hours(25)));
    }
}
