//! File-driven evaluation command implementation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use journeyx_core::{FactModel, InsightEngine, TripConditions};

use super::{print_json, render_confidence, render_faults, render_insights, render_recommendation};

pub fn cmd_evaluate(file: &Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read conditions file: {}", file.display()))?;
    let conditions = TripConditions::from_json(&raw)
        .with_context(|| format!("Invalid conditions document: {}", file.display()))?;

    tracing::debug!(file = %file.display(), "Evaluating conditions document");

    let facts = FactModel::from_conditions(&conditions);
    let evaluation = InsightEngine::new().evaluate(&facts);

    let location = facts
        .content()
        .map(|c| c.location_label().to_string())
        .filter(|label| !label.is_empty());

    if json {
        return print_json(location.as_deref(), &evaluation);
    }

    println!();
    match &location {
        Some(label) => println!("🧭 Evaluation │ {}", label),
        None => println!("🧭 Evaluation"),
    }
    println!();

    render_confidence(evaluation.confidence.as_ref());
    render_insights(&evaluation.insights);

    if !facts.transport().is_empty() || evaluation.recommendation.is_some() {
        println!();
        render_recommendation(evaluation.recommendation.as_ref());
    }

    render_faults(&evaluation.faults);

    Ok(())
}
