//! Travel assistant command implementations

use anyhow::{bail, Result};
use journeyx_core::{FactModel, InsightEngine};

use super::{print_json, render_confidence, render_faults, render_insights};
use crate::data;

pub fn cmd_assistant(city: &str, extra_tags: &[String], json: bool) -> Result<()> {
    let Some(conditions) = data::find_city(city) else {
        bail!("Unknown city: {} (try `journeyx cities`)", city);
    };

    let mut tags = conditions.tags();
    tags.extend(extra_tags.iter().cloned());

    let facts = FactModel::builder()
        .weather(&conditions.reading())
        .content(&tags, &conditions.label())
        .build();
    let evaluation = InsightEngine::new().evaluate(&facts);

    if json {
        return print_json(Some(&conditions.label()), &evaluation);
    }

    println!();
    println!("🧭 Travel Assistant │ {}", conditions.label());
    println!(
        "   {}°C │ {} │ wind {} km/h │ humidity {}%",
        conditions.temperature, conditions.condition, conditions.wind_speed, conditions.humidity
    );
    println!();

    render_confidence(evaluation.confidence.as_ref());
    render_insights(&evaluation.insights);
    render_faults(&evaluation.faults);

    Ok(())
}

pub fn cmd_cities() -> Result<()> {
    println!();
    println!("🌍 Bundled destinations");
    println!("   ─────────────────────────────────────────────────────────────");
    for city in data::CITIES {
        println!(
            "   {:10} {:10} │ {:>4}°C {:14} │ tags: {}",
            city.city,
            city.country,
            city.temperature,
            city.condition,
            city.tags.join(", ")
        );
    }
    Ok(())
}
