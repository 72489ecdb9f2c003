//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `assistant` - Destination insight commands (assistant, cities)
//! - `transport` - Journey comparison command
//! - `safety` - Regional advisory command
//! - `evaluate` - File-driven evaluation command

pub mod assistant;
pub mod evaluate;
pub mod safety;
pub mod transport;

// Re-export command functions for main.rs
pub use assistant::*;
pub use evaluate::*;
pub use safety::*;
pub use transport::*;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use journeyx_core::{
    ConfidenceLevel, Evaluation, EvaluationFault, Insight, Recommendation, Severity,
    TravelConfidence,
};

/// JSON envelope for machine-readable output. The timestamp is attached
/// here, by the caller: evaluations themselves carry no notion of time.
#[derive(Serialize)]
pub struct EvaluationReport<'a> {
    pub evaluated_at: DateTime<Utc>,
    pub location: Option<&'a str>,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

pub(crate) fn print_json(location: Option<&str>, evaluation: &Evaluation) -> Result<()> {
    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        location,
        evaluation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️ ",
        Severity::Caution => "⚠️ ",
        Severity::Warning => "🚨",
    }
}

pub(crate) fn render_confidence(confidence: Option<&TravelConfidence>) {
    if let Some(banner) = confidence {
        let icon = match banner.level {
            ConfidenceLevel::Good => "🟢",
            ConfidenceLevel::Moderate => "🟡",
        };
        println!("{} Travel confidence: {}", icon, banner.level);
        println!("   {}", banner.headline);
        println!();
    }
}

pub(crate) fn render_insights(insights: &[Insight]) {
    println!("📋 Today's insights");
    println!("   ─────────────────────────────────────────────────────────────");
    for insight in insights {
        println!(
            "   {} {} [{}]",
            severity_icon(insight.severity),
            insight.title,
            insight.category
        );
        println!("      {}", insight.message);
    }
}

pub(crate) fn render_recommendation(recommendation: Option<&Recommendation>) {
    match recommendation {
        Some(rec) => {
            println!("✅ {}", rec.headline);
            for reason in &rec.reasons {
                println!("   - {}", reason);
            }
            if let Some(note) = &rec.context_note {
                println!("   ⚠️  {}", note);
            }
        }
        None => println!("No transport pick for this listing."),
    }
}

pub(crate) fn render_faults(faults: &[EvaluationFault]) {
    if faults.is_empty() {
        return;
    }
    println!();
    println!("⚠️  Skipped inputs and rules:");
    for fault in faults {
        println!("   {} - {}", fault.origin, fault.message);
    }
}
