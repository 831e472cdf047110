use anyhow::Result;
use chrono::Utc;

use quorum_core::id::UserId;
use quorum_core::tally::VoteTally;
use quorum_store::query::DecisionFilter;

pub fn run(filter: &str, user: &UserId, json: bool) -> Result<()> {
    let filter = match DecisionFilter::parse(filter, user) {
        Some(filter) => filter,
        None => anyhow::bail!("unknown filter '{}' (expected all, active or mine)", filter),
    };

    let store = super::open_board();
    let decisions = store.list(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&decisions)?);
        return Ok(());
    }

    if decisions.is_empty() {
        println!("No decisions to show");
        return Ok(());
    }

    let now = Utc::now();
    for (i, decision) in decisions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let tally = VoteTally::from_votes(&decision.votes);
        let marker = if decision.is_new_at(now) { " (new)" } else { "" };
        println!("decision {}{}", decision.id, marker);
        println!("Title:    {}", decision.title);
        println!("Category: {}", decision.category);
        println!("Status:   {}", decision.status);
        println!(
            "Votes:    {} yes / {} no / {} maybe",
            tally.yes, tally.no, tally.maybe
        );
        if let Some(deadline) = decision.deadline {
            println!("Deadline: {}", deadline.format("%Y-%m-%d"));
        }
        if !decision.tags.is_empty() {
            println!("Tags:     {}", decision.tags.join(", "));
        }
    }

    Ok(())
}
