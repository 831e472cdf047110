use anyhow::Result;

use quorum_core::id::{DecisionId, DiscussionId, UserId};

pub fn run(id: &str, discussion: &str, content: &str, user: &UserId, json: bool) -> Result<()> {
    let store = super::open_board();
    let reply = store.add_reply(
        &DecisionId::from(id),
        &DiscussionId::from(discussion),
        user,
        content,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!("Added reply {} to discussion {}", reply.id, discussion);
    Ok(())
}
