//! Travel confidence summary
//!
//! A one-line banner summarizing how the day looks. Derived entirely from
//! the weather facet, so it degrades together with it: no valid weather, no
//! banner.

use serde::{Deserialize, Serialize};

use crate::facts::{SkyCondition, WeatherFact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Good,
    Moderate,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The day's confidence banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelConfidence {
    pub level: ConfidenceLevel,
    pub headline: String,
}

/// Summarizes the day from the weather facet.
///
/// Rain outranks heat when both apply.
pub fn assess(weather: Option<&WeatherFact>) -> Option<TravelConfidence> {
    let w = weather?;

    let (level, headline) = if w.condition == SkyCondition::Rain {
        (
            ConfidenceLevel::Moderate,
            "Rain expected. Plan indoor alternatives for afternoon activities.",
        )
    } else if w.temperature_c > 32.0 {
        (
            ConfidenceLevel::Moderate,
            "High heat. Stay hydrated and avoid midday outdoor activities.",
        )
    } else {
        (
            ConfidenceLevel::Good,
            "Conditions are favorable for outdoor exploration today.",
        )
    };

    Some(TravelConfidence {
        level,
        headline: headline.to_string(),
    })
}
