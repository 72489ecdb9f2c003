//! Error types for JourneyX

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid fact: {0}")]
    InvalidFact(String),

    #[error("Rule error: {0}")]
    Rule(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal failure recorded while assembling facts or walking rules.
///
/// Faults never abort an evaluation. They ride along on the result so callers
/// can tell a clean run from a degraded one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationFault {
    /// Facet label ("weather", "transport[2]") or the id of the failed rule.
    pub origin: String,
    /// What went wrong.
    pub message: String,
}

impl EvaluationFault {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
        }
    }
}
