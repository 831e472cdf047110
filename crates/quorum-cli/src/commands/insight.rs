use anyhow::Result;

use quorum_core::model::Category;
use quorum_insight::engine::InsightEngine;

pub async fn run(
    category: &str,
    title: &str,
    description: &str,
    insight_delay_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let category = Category::parse_lossy(category);
    let engine = InsightEngine::new(super::insight_config(insight_delay_ms));
    let content = engine.synthesize(category, title, description).await;

    if json {
        let output = serde_json::json!({
            "category": category,
            "insight": content,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "AI insight for a {} decision ({}, confidence {:.2}):",
        category, content.sentiment, content.confidence
    );
    println!("  {}", content.summary);
    println!("  Pros:");
    for pro in &content.pros {
        println!("    - {}", pro);
    }
    println!("  Cons:");
    for con in &content.cons {
        println!("    - {}", con);
    }
    println!("  Recommendations:");
    for rec in &content.recommendations {
        println!("    - {}", rec);
    }
    Ok(())
}
