use std::collections::HashMap;

use anyhow::Result;

use quorum_core::id::{DecisionId, UserId};
use quorum_core::tally::VoteTally;
use quorum_store::seed;

pub fn run(id: &str, json: bool) -> Result<()> {
    let store = super::open_board();
    let decision = store.get(&DecisionId::from(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    let names: HashMap<UserId, String> = seed::demo_users()
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect();
    let name_of = |id: &UserId| -> &str {
        names.get(id).map(String::as_str).unwrap_or("unknown")
    };

    println!("decision {}", decision.id);
    println!("Title:    {}", decision.title);
    println!("Category: {}", decision.category);
    println!("Status:   {}", decision.status);
    println!("Author:   {}", name_of(&decision.created_by));
    println!("Created:  {}", decision.created_at.format("%Y-%m-%d"));
    if let Some(deadline) = decision.deadline {
        println!("Deadline: {}", deadline.format("%Y-%m-%d"));
    }
    if !decision.tags.is_empty() {
        println!("Tags:     {}", decision.tags.join(", "));
    }
    println!();
    println!("    {}", decision.description);

    if !decision.votes.is_empty() {
        let tally = VoteTally::from_votes(&decision.votes);
        println!();
        println!(
            "Votes ({} yes / {} no / {} maybe):",
            tally.yes, tally.no, tally.maybe
        );
        for vote in &decision.votes {
            println!(
                "  - {} by {} (confidence {})",
                vote.option,
                name_of(&vote.user_id),
                vote.confidence
            );
            if let Some(reasoning) = &vote.reasoning {
                println!("    {}", reasoning);
            }
        }
    }

    if !decision.discussions.is_empty() {
        println!();
        println!("Discussions:");
        for discussion in &decision.discussions {
            println!(
                "  [{}] {} ({}, {} likes)",
                discussion.id,
                name_of(&discussion.user_id),
                discussion.kind,
                discussion.likes
            );
            println!("      {}", discussion.content);
            for reply in &discussion.replies {
                println!(
                    "      reply [{}] {} ({} likes)",
                    reply.id,
                    name_of(&reply.user_id),
                    reply.likes
                );
                println!("        {}", reply.content);
            }
        }
    }

    if let Some(insight) = &decision.insight {
        println!();
        println!(
            "AI insight ({}, confidence {:.2}):",
            insight.sentiment, insight.confidence
        );
        println!("  {}", insight.summary);
        println!("  Pros:");
        for pro in &insight.pros {
            println!("    - {}", pro);
        }
        println!("  Cons:");
        for con in &insight.cons {
            println!("    - {}", con);
        }
        println!("  Recommendations:");
        for rec in &insight.recommendations {
            println!("    - {}", rec);
        }
    }

    Ok(())
}
