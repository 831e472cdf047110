use anyhow::Result;

use quorum_core::id::{DecisionId, UserId};
use quorum_core::model::DiscussionKind;

pub fn run(id: &str, content: &str, kind: &str, user: &UserId, json: bool) -> Result<()> {
    let kind = match kind.trim().to_lowercase().as_str() {
        "pro" => DiscussionKind::Pro,
        "con" => DiscussionKind::Con,
        "neutral" => DiscussionKind::Neutral,
        "question" => DiscussionKind::Question,
        other => anyhow::bail!(
            "invalid discussion kind '{}' (expected pro, con, neutral or question)",
            other
        ),
    };

    let store = super::open_board();
    let discussion = store.add_discussion(&DecisionId::from(id), user, content, kind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&discussion)?);
        return Ok(());
    }

    println!(
        "Started {} discussion {} on decision {}",
        discussion.kind, discussion.id, id
    );
    Ok(())
}
