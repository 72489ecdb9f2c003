//! Regional safety advisory command implementation

use anyhow::Result;

use crate::data;

pub fn cmd_safety(json: bool) -> Result<()> {
    if json {
        let advisories: Vec<serde_json::Value> = data::REGION_ADVISORIES
            .iter()
            .map(|a| {
                serde_json::json!({
                    "region": a.region,
                    "risk": a.risk,
                    "notice": a.notice,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&advisories)?);
        return Ok(());
    }

    println!();
    println!("🗺️  Regional safety advisories");
    println!("   ─────────────────────────────────────────────────────────────");
    for advisory in data::REGION_ADVISORIES {
        let icon = if advisory.risk == "Low" { "🟢" } else { "🟡" };
        println!("   {} {:26} │ {} risk", icon, advisory.region, advisory.risk);
        println!("      {}", advisory.notice);
    }

    Ok(())
}
