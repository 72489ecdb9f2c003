//! Insight Engine - Contextual Travel Advisories
//!
//! The insight engine turns a snapshot of situational facts into ordered,
//! actionable advisories. Instead of waiting for travelers to ask the right
//! questions, it walks a declarative rule catalogue over the facts and
//! surfaces what is worth planning around today.
//!
//! ## Components
//!
//! - **Rules** - Declarative condition-to-insight rules with priorities and
//!   exclusive groups
//! - **Engine** - Priority-ordered, fault-tolerant rule evaluation
//! - **Transport** - Best-pick recommendation over the journey's options
//! - **Confidence** - One-line summary of the day's outlook
//!
//! ## Usage
//!
//! ```rust,ignore
//! use journeyx_core::{FactModel, InsightEngine};
//!
//! let facts = FactModel::builder()
//!     .weather(&reading)
//!     .content(&tags, "Bali, Indonesia")
//!     .transport(&options)
//!     .build();
//! let evaluation = InsightEngine::new().evaluate(&facts);
//! ```

pub mod confidence;
pub mod engine;
pub mod rules;
pub mod transport;
pub mod types;

pub use confidence::{ConfidenceLevel, TravelConfidence};
pub use engine::{Evaluation, InsightEngine};
pub use rules::{Rule, RuleSet};
pub use transport::{
    recommend, Recommendation, TravelOutlook, VALUE_PICK_MAX_TIME_PENALTY_MIN,
    VALUE_PICK_MIN_PRICE_GAP,
};
pub use types::{Insight, InsightCategory, Severity};
