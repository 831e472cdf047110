use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use quorum_core::id::UserId;
use quorum_core::model::DecisionDraft;
use quorum_insight::engine::InsightEngine;
use quorum_store::store::DecisionStore;

pub async fn run(
    title: String,
    description: String,
    category: String,
    deadline: Option<String>,
    tags: String,
    insight_delay_ms: Option<u64>,
    user: &UserId,
    json: bool,
) -> Result<()> {
    let deadline = deadline.as_deref().map(parse_deadline).transpose()?;
    let draft = DecisionDraft {
        title,
        description,
        category,
        deadline,
        tags,
    };

    let store = DecisionStore::seeded(InsightEngine::new(super::insight_config(insight_delay_ms)));
    let decision = store.create(draft, user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    println!("Created decision {} ({})", decision.id, decision.category);
    println!("Title: {}", decision.title);
    if let Some(deadline) = decision.deadline {
        println!("Deadline: {}", deadline.format("%Y-%m-%d"));
    }
    if !decision.tags.is_empty() {
        println!("Tags:  {}", decision.tags.join(", "));
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

/// "YYYY-MM-DD" meaning the end of that day, UTC.
fn parse_deadline(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .context(format!("invalid deadline '{}' (expected YYYY-MM-DD)", raw))?;
    let end_of_day = date.and_hms_opt(23, 59, 59).context("invalid deadline")?;
    Ok(Utc.from_utc_datetime(&end_of_day))
}
