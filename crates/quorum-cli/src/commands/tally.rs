use anyhow::Result;

use quorum_core::id::DecisionId;

pub fn run(id: &str, json: bool) -> Result<()> {
    let store = super::open_board();
    let tally = store.tally(&DecisionId::from(id))?;
    let shares = tally.percentages();

    if json {
        let output = serde_json::json!({
            "tally": tally,
            "shares": shares,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} votes on decision {}", tally.total(), id);
    println!("  yes:   {} ({:.0}%)", tally.yes, shares.yes);
    println!("  no:    {} ({:.0}%)", tally.no, shares.no);
    println!("  maybe: {} ({:.0}%)", tally.maybe, shares.maybe);
    Ok(())
}
