//! Transport recommendation selector
//!
//! Compares the journey's listed options against the day's weather outlook
//! and picks at most one. Branches run strictly first-applicable-wins, with
//! reliability considered before cost and cost before speed.

use serde::{Deserialize, Serialize};

use crate::facts::{SkyCondition, TransportMode, TransportOption, WeatherFact};

/// Price gap (in dollars) a flight must exceed before the train counts as
/// better value.
pub const VALUE_PICK_MIN_PRICE_GAP: f64 = 150.0;

/// Extra minutes of train time the value pick tolerates.
pub const VALUE_PICK_MAX_TIME_PENALTY_MIN: i64 = 240;

/// How friendly the day looks for travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelOutlook {
    Good,
    Moderate,
    Poor,
}

impl TravelOutlook {
    /// Derives the day's outlook from the weather facet.
    ///
    /// Missing weather reads as good: the selector then leans on price and
    /// duration alone.
    pub fn from_weather(weather: Option<&WeatherFact>) -> Self {
        let Some(w) = weather else {
            return Self::Good;
        };

        if w.condition == SkyCondition::Rain {
            return Self::Poor;
        }
        if matches!(w.condition, SkyCondition::Hot | SkyCondition::Windy)
            || w.temperature_c > 32.0
            || w.wind_speed_kph > 20.0
        {
            return Self::Moderate;
        }

        Self::Good
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for TravelOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The selector's best pick for a journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Always one of the modes present in the evaluated listing
    pub picked_mode: TransportMode,
    /// Card headline (e.g., "Train is more reliable today")
    pub headline: String,
    /// Concrete reasons for the pick, never empty
    pub reasons: Vec<String>,
    /// Optional caveat worth surfacing next to the pick
    pub context_note: Option<String>,
}

/// Picks the best transport option for the journey, if the listing and
/// conditions single one out.
///
/// Duplicate modes resolve to their first listing. An empty listing yields
/// `None`, which is a valid quiet outcome rather than an error.
pub fn recommend(
    options: &[TransportOption],
    weather: Option<&WeatherFact>,
) -> Option<Recommendation> {
    if options.is_empty() {
        return None;
    }

    let outlook = TravelOutlook::from_weather(weather);
    let train = options.iter().find(|o| o.mode == TransportMode::Train);
    let flight = options.iter().find(|o| o.mode == TransportMode::Flight);

    // Reliability beats everything on a rough day.
    if outlook == TravelOutlook::Poor && train.is_some() {
        return Some(Recommendation {
            picked_mode: TransportMode::Train,
            headline: "Train is more reliable today".to_string(),
            reasons: vec![
                "Not affected by weather delays".to_string(),
                "Lower cost".to_string(),
                "Comfortable for solo travelers".to_string(),
            ],
            context_note: Some("Flights may face delays due to weather".to_string()),
        });
    }

    if let (Some(train), Some(flight)) = (train, flight) {
        let price_gap = flight.price_amount - train.price_amount;
        let time_penalty =
            i64::from(train.duration_minutes) - i64::from(flight.duration_minutes);
        if price_gap > VALUE_PICK_MIN_PRICE_GAP && time_penalty < VALUE_PICK_MAX_TIME_PENALTY_MIN {
            return Some(Recommendation {
                picked_mode: TransportMode::Train,
                headline: "Train is better value for solo travel".to_string(),
                reasons: vec![
                    format!("Save ${} with similar time", price_gap),
                    "Comfortable and safer for solo travelers".to_string(),
                    "Central station locations".to_string(),
                ],
                context_note: None,
            });
        }
    }

    if flight.is_some() {
        let context_note = if outlook == TravelOutlook::Moderate {
            Some("Monitor weather before departure".to_string())
        } else {
            None
        };
        return Some(Recommendation {
            picked_mode: TransportMode::Flight,
            headline: "Flight is fastest for this route".to_string(),
            reasons: vec![
                "Significantly shorter time".to_string(),
                "Direct route available".to_string(),
                "Best for long distances".to_string(),
            ],
            context_note,
        });
    }

    if train.is_some() {
        return Some(Recommendation {
            picked_mode: TransportMode::Train,
            headline: "Train recommended".to_string(),
            reasons: vec!["Reliable and comfortable".to_string()],
            context_note: None,
        });
    }

    // No flight or train listed. Fall back to the first option so the pick
    // always names a mode the caller actually offered.
    let first = &options[0];
    Some(Recommendation {
        picked_mode: first.mode,
        headline: format!("{} recommended", mode_label(first.mode)),
        reasons: vec!["Only listed option for this route".to_string()],
        context_note: None,
    })
}

fn mode_label(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Flight => "Flight",
        TransportMode::Train => "Train",
        TransportMode::Bus => "Bus",
    }
}
