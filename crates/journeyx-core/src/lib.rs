//! JourneyX Core Library
//!
//! Shared functionality for the JourneyX travel assistant:
//! - Fact model assembly from raw weather, content, and transport inputs
//! - Declarative rule catalogue for travel advisories
//! - Deterministic, fault-tolerant insight evaluation
//! - Transport recommendation selection
//! - Travel confidence summaries

pub mod error;
pub mod facts;
pub mod insights;

pub use error::{Error, EvaluationFault, Result};
pub use facts::{
    ComfortLevel, ContentFact, FactModel, FactModelBuilder, Reliability, SkyCondition,
    TransportMode, TransportOption, TripConditions, WeatherFact, WeatherReading,
};
pub use insights::{
    ConfidenceLevel, Evaluation, Insight, InsightCategory, InsightEngine, Recommendation, Rule,
    RuleSet, Severity, TravelConfidence, TravelOutlook,
};
