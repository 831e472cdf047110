use anyhow::Result;

use quorum_core::id::UserId;

pub fn run(user: &UserId, json: bool) -> Result<()> {
    let store = super::open_board();
    let stats = store.stats(user);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Decisions:   {}", stats.decisions);
    println!("Active:      {}", stats.active);
    println!("Yours:       {}", stats.mine);
    println!("Votes:       {}", stats.votes);
    println!("Discussions: {}", stats.discussions);
    Ok(())
}
