use anyhow::Result;

use quorum_core::id::{DecisionId, DiscussionId, ReplyId};

pub fn run(id: &str, discussion: &str, reply: Option<String>, json: bool) -> Result<()> {
    let store = super::open_board();
    let decision_id = DecisionId::from(id);
    let discussion_id = DiscussionId::from(discussion);

    let likes = match reply {
        Some(reply) => store.like_reply(&decision_id, &discussion_id, &ReplyId::from(reply))?,
        None => store.like_discussion(&decision_id, &discussion_id)?,
    };

    if json {
        let output = serde_json::json!({ "likes": likes });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} likes", likes);
    Ok(())
}
