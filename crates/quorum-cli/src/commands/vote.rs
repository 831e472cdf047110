use anyhow::Result;

use quorum_core::id::{DecisionId, UserId};
use quorum_core::model::VoteOption;

pub fn run(
    id: &str,
    option: &str,
    reasoning: Option<String>,
    confidence: u8,
    user: &UserId,
    json: bool,
) -> Result<()> {
    let option = match option.trim().to_lowercase().as_str() {
        "yes" => VoteOption::Yes,
        "no" => VoteOption::No,
        "maybe" => VoteOption::Maybe,
        other => anyhow::bail!("invalid vote option '{}' (expected yes, no or maybe)", other),
    };

    let store = super::open_board();
    let decision_id = DecisionId::from(id);
    let vote = store.cast_vote(&decision_id, user, option, reasoning, confidence)?;
    let tally = store.tally(&decision_id)?;

    if json {
        let output = serde_json::json!({
            "vote": vote,
            "tally": tally,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Recorded {} vote on decision {}", vote.option, decision_id);
    println!(
        "Tally: {} yes / {} no / {} maybe",
        tally.yes, tally.no, tally.maybe
    );
    Ok(())
}
