//! Journey comparison command implementation

use anyhow::{bail, Result};
use journeyx_core::{FactModel, InsightEngine, TransportMode, TravelOutlook};

use super::{print_json, render_recommendation};
use crate::data;

pub fn cmd_transport(from: &str, to: &str, city: &str, json: bool) -> Result<()> {
    let Some(conditions) = data::find_city(city) else {
        bail!("Unknown city: {} (try `journeyx cities`)", city);
    };

    let options = data::journey_options();
    let facts = FactModel::builder()
        .weather(&conditions.reading())
        .transport(&options)
        .build();
    let evaluation = InsightEngine::new().evaluate(&facts);

    if json {
        return print_json(Some(&conditions.label()), &evaluation);
    }

    let outlook = TravelOutlook::from_weather(facts.weather());

    println!();
    println!("🧳 Journey comparison │ {} → {}", from, to);
    println!(
        "   Weather basis: {} ({} outlook)",
        conditions.label(),
        outlook
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for option in facts.transport() {
        println!(
            "   {} {:7} │ {:>6} │ {:>8} │ {:6} comfort │ {}",
            mode_icon(option.mode),
            option.mode,
            format!("${}", option.price_amount),
            format_duration(option.duration_minutes),
            option.comfort,
            option.reliability
        );
    }

    println!();
    render_recommendation(evaluation.recommendation.as_ref());

    Ok(())
}

fn mode_icon(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Flight => "✈️ ",
        TransportMode::Train => "🚆",
        TransportMode::Bus => "🚌",
    }
}

fn format_duration(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
