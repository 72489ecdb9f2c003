//! Situational facts and the fact model builder
//!
//! Raw caller inputs (weather readings, destination tags, transport listings)
//! are normalized here into typed facts. Validation happens at this boundary:
//! an invalid facet is dropped and recorded, never carried into rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, EvaluationFault, Result};

/// Closed sky-condition vocabulary derived from free-form provider strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyCondition {
    Clear,
    Rain,
    Cloudy,
    Hot,
    Windy,
    Unknown,
}

impl SkyCondition {
    /// Maps a provider description onto the vocabulary.
    ///
    /// Case-insensitive substring match, first match wins. Descriptions that
    /// match nothing classify as `Unknown`, and no weather rule keys on
    /// `Unknown`.
    pub fn classify(raw: &str) -> Self {
        let desc = raw.to_lowercase();

        if desc.contains("rain") {
            return Self::Rain;
        }
        if desc.contains("sunny") || desc.contains("clear") {
            return Self::Clear;
        }
        if desc.contains("cloud") {
            return Self::Cloudy;
        }
        if desc.contains("hot") {
            return Self::Hot;
        }
        if desc.contains("wind") {
            return Self::Windy;
        }

        Self::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Cloudy => "cloudy",
            Self::Hot => "hot",
            Self::Windy => "windy",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for SkyCondition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "rain" => Ok(Self::Rain),
            "cloudy" => Ok(Self::Cloudy),
            "hot" => Ok(Self::Hot),
            "windy" => Ok(Self::Windy),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown sky condition: {}", s)),
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw weather reading as a provider hands it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub condition: String,
    pub wind_speed: f64,
    pub humidity: f64,
}

/// Validated, classified weather for one destination and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFact {
    pub temperature_c: f64,
    pub condition: SkyCondition,
    pub wind_speed_kph: f64,
    pub humidity_pct: f64,
}

impl WeatherFact {
    /// Validates and classifies a raw reading.
    ///
    /// Rejects non-finite numbers, negative wind, and humidity outside
    /// 0..=100. Rejection is scoped to this facet.
    pub fn from_reading(reading: &WeatherReading) -> Result<Self> {
        if !reading.temperature.is_finite() {
            return Err(Error::InvalidFact(format!(
                "temperature must be a finite number, got {}",
                reading.temperature
            )));
        }
        if !reading.wind_speed.is_finite() || reading.wind_speed < 0.0 {
            return Err(Error::InvalidFact(format!(
                "wind speed must be finite and non-negative, got {}",
                reading.wind_speed
            )));
        }
        if !reading.humidity.is_finite() || !(0.0..=100.0).contains(&reading.humidity) {
            return Err(Error::InvalidFact(format!(
                "humidity must be within 0..=100, got {}",
                reading.humidity
            )));
        }

        Ok(Self {
            temperature_c: reading.temperature,
            condition: SkyCondition::classify(&reading.condition),
            wind_speed_kph: reading.wind_speed,
            humidity_pct: reading.humidity,
        })
    }
}

/// Destination content descriptors: normalized tags plus a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFact {
    tags: BTreeSet<String>,
    location_label: String,
}

impl ContentFact {
    /// Normalizes tags: trim, lowercase, drop empties, dedupe.
    pub fn new(tags: &[String], location_label: impl Into<String>) -> Self {
        let tags = tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            tags,
            location_label: location_label.into(),
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// True when any normalized tag contains the needle as a substring.
    /// Matching is deliberately fuzzy: "beachparadise" matches "beach".
    pub fn any_tag_contains(&self, needle: &str) -> bool {
        self.tags.iter().any(|t| t.contains(needle))
    }

    pub fn location_label(&self) -> &str {
        &self.location_label
    }
}

/// Transport modes the recommendation selector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" | "plane" => Ok(Self::Flight),
            "train" | "rail" => Ok(Self::Train),
            "bus" | "coach" => Ok(Self::Bus),
            _ => Err(format!("Unknown transport mode: {}", s)),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comfort tier of a transport option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ComfortLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for ComfortLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown comfort level: {}", s)),
        }
    }
}

impl std::fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How exposed an option is to day-of disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Reliability {
    #[default]
    Stable,
    WeatherSensitive,
    Variable,
}

impl Reliability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::WeatherSensitive => "weather-sensitive",
            Self::Variable => "variable",
        }
    }
}

impl std::str::FromStr for Reliability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "weather-sensitive" | "weather_sensitive" => Ok(Self::WeatherSensitive),
            "variable" => Ok(Self::Variable),
            _ => Err(format!("Unknown reliability: {}", s)),
        }
    }
}

impl std::fmt::Display for Reliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bookable way to make the journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportOption {
    pub mode: TransportMode,
    pub price_amount: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub comfort: ComfortLevel,
    #[serde(default)]
    pub reliability: Reliability,
    #[serde(default)]
    pub solo_friendly: bool,
}

impl TransportOption {
    pub fn new(mode: TransportMode, price_amount: f64, duration_minutes: u32) -> Self {
        Self {
            mode,
            price_amount,
            duration_minutes,
            comfort: ComfortLevel::default(),
            reliability: Reliability::default(),
            solo_friendly: false,
        }
    }

    pub fn with_comfort(mut self, comfort: ComfortLevel) -> Self {
        self.comfort = comfort;
        self
    }

    pub fn with_reliability(mut self, reliability: Reliability) -> Self {
        self.reliability = reliability;
        self
    }

    pub fn with_solo_friendly(mut self, solo_friendly: bool) -> Self {
        self.solo_friendly = solo_friendly;
        self
    }

    /// Price must be a finite non-negative amount.
    pub fn validate(&self) -> Result<()> {
        if !self.price_amount.is_finite() || self.price_amount < 0.0 {
            return Err(Error::InvalidFact(format!(
                "price must be finite and non-negative, got {}",
                self.price_amount
            )));
        }
        Ok(())
    }
}

/// The raw condition document file-driven callers submit.
///
/// Every facet is optional. Facets that are present but invalid are dropped
/// during assembly with a recorded fault; the rest of the document still
/// evaluates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripConditions {
    pub weather: Option<WeatherReading>,
    pub tags: Option<Vec<String>>,
    pub location: Option<String>,
    #[serde(default)]
    pub transport: Vec<TransportOption>,
}

impl TripConditions {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Immutable snapshot of everything known about the trip under evaluation.
///
/// Built once, read by every rule. Absent facets are `None` or empty; rules
/// that need a missing facet simply do not fire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FactModel {
    weather: Option<WeatherFact>,
    content: Option<ContentFact>,
    transport: Vec<TransportOption>,
    rejected: Vec<EvaluationFault>,
}

impl FactModel {
    pub fn builder() -> FactModelBuilder {
        FactModelBuilder::default()
    }

    /// Assembles a model straight from a raw condition document.
    pub fn from_conditions(conditions: &TripConditions) -> Self {
        let mut builder = Self::builder();
        if let Some(reading) = &conditions.weather {
            builder = builder.weather(reading);
        }
        if conditions.tags.is_some() || conditions.location.is_some() {
            let tags = conditions.tags.as_deref().unwrap_or(&[]);
            builder = builder.content(tags, conditions.location.as_deref().unwrap_or(""));
        }
        builder.transport(&conditions.transport).build()
    }

    pub fn weather(&self) -> Option<&WeatherFact> {
        self.weather.as_ref()
    }

    pub fn content(&self) -> Option<&ContentFact> {
        self.content.as_ref()
    }

    pub fn transport(&self) -> &[TransportOption] {
        &self.transport
    }

    /// Facets dropped during assembly, in submission order.
    pub fn rejected(&self) -> &[EvaluationFault] {
        &self.rejected
    }
}

/// Collects and validates facets one at a time.
///
/// Each facet stands alone: rejecting one records a fault and leaves the
/// others untouched.
#[derive(Debug, Default)]
pub struct FactModelBuilder {
    weather: Option<WeatherFact>,
    content: Option<ContentFact>,
    transport: Vec<TransportOption>,
    rejected: Vec<EvaluationFault>,
}

impl FactModelBuilder {
    pub fn weather(mut self, reading: &WeatherReading) -> Self {
        match WeatherFact::from_reading(reading) {
            Ok(fact) => self.weather = Some(fact),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected weather reading");
                self.rejected
                    .push(EvaluationFault::new("weather", e.to_string()));
            }
        }
        self
    }

    pub fn content(mut self, tags: &[String], location_label: &str) -> Self {
        self.content = Some(ContentFact::new(tags, location_label));
        self
    }

    pub fn transport(mut self, options: &[TransportOption]) -> Self {
        for (idx, option) in options.iter().enumerate() {
            match option.validate() {
                Ok(()) => self.transport.push(option.clone()),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "Rejected transport option");
                    self.rejected.push(EvaluationFault::new(
                        format!("transport[{}]", idx),
                        e.to_string(),
                    ));
                }
            }
        }
        self
    }

    pub fn build(self) -> FactModel {
        FactModel {
            weather: self.weather,
            content: self.content,
            transport: self.transport,
            rejected: self.rejected,
        }
    }
}
