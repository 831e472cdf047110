pub mod category;
pub mod decision;
pub mod discussion;
pub mod insight;
pub mod user;
pub mod vote;

pub use category::Category;
pub use decision::{normalize_tags, Decision, DecisionDraft, DecisionStatus};
pub use discussion::{Discussion, DiscussionKind, Reply};
pub use insight::{Insight, Sentiment};
pub use user::User;
pub use vote::{Vote, VoteOption};
