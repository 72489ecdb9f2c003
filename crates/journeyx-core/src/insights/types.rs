//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth planning around
    Caution,
    /// Should change today's plans
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Caution => "caution",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "caution" => Ok(Severity::Caution),
            "warning" => Ok(Severity::Warning),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Advisory domain an insight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    /// Sky and precipitation conditions
    Weather,
    /// Hydration, heat, and exertion advice
    Health,
    /// Personal safety guidance
    Safety,
    /// Comfort and pacing advice
    Comfort,
    /// Conditions worth taking advantage of
    Opportunity,
    /// Timing and itinerary planning
    Planning,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Weather => "weather",
            InsightCategory::Health => "health",
            InsightCategory::Safety => "safety",
            InsightCategory::Comfort => "comfort",
            InsightCategory::Opportunity => "opportunity",
            InsightCategory::Planning => "planning",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weather" => Ok(InsightCategory::Weather),
            "health" => Ok(InsightCategory::Health),
            "safety" => Ok(InsightCategory::Safety),
            "comfort" => Ok(InsightCategory::Comfort),
            "opportunity" => Ok(InsightCategory::Opportunity),
            "planning" => Ok(InsightCategory::Planning),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// An advisory produced by one rule firing against the fact model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Short headline (e.g., "Rain expected today")
    pub title: String,
    /// One or two sentences of concrete guidance
    pub message: String,
    /// How urgent the advisory is
    pub severity: Severity,
    /// Advisory domain, for grouping in callers
    pub category: InsightCategory,
}

impl Insight {
    pub fn new(
        category: InsightCategory,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            category,
        }
    }
}
