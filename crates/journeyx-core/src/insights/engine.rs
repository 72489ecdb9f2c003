//! Evaluation engine walking the rule set over a fact model
//!
//! One evaluation is a pure function of one fact snapshot: rules run in
//! priority order, exclusive groups emit at most once, and a failing rule is
//! recorded and skipped rather than aborting the walk.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::EvaluationFault;
use crate::facts::FactModel;
use crate::insights::confidence::{self, TravelConfidence};
use crate::insights::rules::{Rule, RuleSet};
use crate::insights::transport::{self, Recommendation};
use crate::insights::types::Insight;

/// Everything one evaluation produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Insights in rule-priority order
    pub insights: Vec<Insight>,
    /// Best transport pick, when the listing singles one out
    pub recommendation: Option<Recommendation>,
    /// Day summary, present when a valid weather facet was supplied
    pub confidence: Option<TravelConfidence>,
    /// Non-fatal assembly and rule failures, in discovery order
    pub faults: Vec<EvaluationFault>,
}

/// Walks registered rules over immutable fact snapshots
pub struct InsightEngine {
    rules: RuleSet,
}

impl InsightEngine {
    /// Engine with the built-in travel catalogue
    pub fn new() -> Self {
        Self {
            rules: RuleSet::travel_defaults(),
        }
    }

    /// Engine with a caller-supplied rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Registers an additional rule
    pub fn register(&mut self, rule: Rule) {
        self.rules.register(rule);
    }

    /// Ids of registered rules in evaluation order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.ids()
    }

    /// Evaluates one fact snapshot.
    ///
    /// Facet rejections recorded during assembly surface first in `faults`,
    /// followed by rule failures in walk order. A failed emission does not
    /// claim its exclusive group, so the group's fallback can still speak.
    pub fn evaluate(&self, facts: &FactModel) -> Evaluation {
        let mut insights = Vec::new();
        let mut faults: Vec<EvaluationFault> = facts.rejected().to_vec();
        let mut fired_groups: HashSet<&str> = HashSet::new();

        for rule in self.rules.in_priority_order() {
            if let Some(group) = rule.exclusive_group() {
                if fired_groups.contains(group) {
                    continue;
                }
            }

            match rule.applies(facts) {
                Ok(false) => continue,
                Ok(true) => match rule.emit(facts) {
                    Ok(insight) => {
                        tracing::debug!(rule = rule.id(), "Rule fired");
                        if let Some(group) = rule.exclusive_group() {
                            fired_groups.insert(group);
                        }
                        insights.push(insight);
                    }
                    Err(e) => {
                        tracing::warn!(rule = rule.id(), error = %e, "Rule emit failed, skipping");
                        faults.push(EvaluationFault::new(rule.id(), e.to_string()));
                    }
                },
                Err(e) => {
                    tracing::warn!(rule = rule.id(), error = %e, "Rule predicate failed, skipping");
                    faults.push(EvaluationFault::new(rule.id(), e.to_string()));
                }
            }
        }

        Evaluation {
            insights,
            recommendation: transport::recommend(facts.transport(), facts.weather()),
            confidence: confidence::assess(facts.weather()),
            faults,
        }
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::facts::{TransportMode, TransportOption, WeatherReading};
    use crate::insights::types::{InsightCategory, Severity};

    fn reading(temperature: f64, condition: &str, wind_speed: f64, humidity: f64) -> WeatherReading {
        WeatherReading {
            temperature,
            condition: condition.to_string(),
            wind_speed,
            humidity,
        }
    }

    fn stub_insight(title: &str) -> Insight {
        Insight::new(InsightCategory::Planning, Severity::Info, title, "m")
    }

    #[test]
    fn test_hot_day_emits_heat_warning_only() {
        let facts = FactModel::builder()
            .weather(&reading(35.0, "Hot", 5.0, 40.0))
            .build();
        let evaluation = InsightEngine::new().evaluate(&facts);

        let titles: Vec<&str> = evaluation.insights.iter().map(|i| i.title.as_str()).collect();
        assert!(titles.contains(&"High heat advisory"));
        assert!(!titles.contains(&"Rain expected today"));
        assert!(!titles.contains(&"Strong winds forecasted"));
        assert!(!titles.contains(&"Perfect for outdoor exploration"));
        assert_eq!(titles.last(), Some(&"Solo traveler safety tip"));
        assert!(evaluation.faults.is_empty());
    }

    #[test]
    fn test_exclusive_group_emits_once() {
        let facts = FactModel::builder()
            .content(
                &["BeachParadise".to_string(), "HiddenGem".to_string()],
                "Bali, Indonesia",
            )
            .build();
        let evaluation = InsightEngine::new().evaluate(&facts);

        let solo_titles: Vec<&str> = evaluation
            .insights
            .iter()
            .filter(|i| {
                [
                    "Weather check advised",
                    "Good for first-time solo travelers",
                    "Better with a local guide",
                    "Solo-friendly destination",
                ]
                .contains(&i.title.as_str())
            })
            .map(|i| i.title.as_str())
            .collect();

        assert_eq!(solo_titles, vec!["Good for first-time solo travelers"]);
    }

    #[test]
    fn test_failing_predicate_is_recorded_and_skipped() {
        let mut engine = InsightEngine::new();
        engine.register(Rule::new(
            "custom-broken",
            5,
            |_| Err(Error::Rule("lookup failed".to_string())),
            |_| Ok(stub_insight("never")),
        ));

        let facts = FactModel::builder()
            .weather(&reading(35.0, "Hot", 5.0, 40.0))
            .build();
        let evaluation = engine.evaluate(&facts);

        assert_eq!(evaluation.faults.len(), 1);
        assert_eq!(evaluation.faults[0].origin, "custom-broken");
        // The rest of the catalogue still ran
        assert!(evaluation
            .insights
            .iter()
            .any(|i| i.title == "High heat advisory"));
        assert!(!evaluation.insights.iter().any(|i| i.title == "never"));
    }

    #[test]
    fn test_failed_emit_leaves_group_open() {
        let mut rules = RuleSet::empty();
        rules.register(
            Rule::new(
                "group-specific",
                1,
                |_| Ok(true),
                |_| Err(Error::Rule("template broken".to_string())),
            )
            .in_group("g"),
        );
        rules.register(
            Rule::new(
                "group-default",
                2,
                |_| Ok(true),
                |_| Ok(stub_insight("fallback")),
            )
            .in_group("g"),
        );

        let evaluation = InsightEngine::with_rules(rules).evaluate(&FactModel::default());

        assert_eq!(evaluation.insights.len(), 1);
        assert_eq!(evaluation.insights[0].title, "fallback");
        assert_eq!(evaluation.faults.len(), 1);
        assert_eq!(evaluation.faults[0].origin, "group-specific");
    }

    #[test]
    fn test_rejected_facet_surfaces_first_in_faults() {
        let facts = FactModel::builder()
            .weather(&reading(f64::NAN, "Sunny", 5.0, 40.0))
            .content(&["BeachParadise".to_string()], "Bali")
            .build();
        let evaluation = InsightEngine::new().evaluate(&facts);

        assert_eq!(evaluation.faults[0].origin, "weather");
        assert!(evaluation.confidence.is_none());
        // Weather rules stayed silent, tag and always-on rules still ran
        assert!(!evaluation.insights.iter().any(|i| i.title == "High heat advisory"));
        assert!(evaluation
            .insights
            .iter()
            .any(|i| i.title == "Good for first-time solo travelers"));
        assert_eq!(
            evaluation.insights.last().map(|i| i.title.as_str()),
            Some("Solo traveler safety tip")
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let facts = FactModel::builder()
            .weather(&reading(18.0, "Rainy", 22.0, 80.0))
            .content(&["MonsoonSeason".to_string()], "Phuket")
            .transport(&[
                TransportOption::new(TransportMode::Flight, 420.0, 150),
                TransportOption::new(TransportMode::Train, 180.0, 345),
            ])
            .build();

        let engine = InsightEngine::new();
        assert_eq!(engine.evaluate(&facts), engine.evaluate(&facts));
    }

    #[test]
    fn test_recommendation_and_confidence_are_assembled() {
        let facts = FactModel::builder()
            .weather(&reading(18.0, "Rainy", 15.0, 80.0))
            .transport(&[
                TransportOption::new(TransportMode::Flight, 420.0, 150),
                TransportOption::new(TransportMode::Train, 180.0, 345),
            ])
            .build();
        let evaluation = InsightEngine::new().evaluate(&facts);

        let rec = evaluation.recommendation.unwrap();
        assert_eq!(rec.picked_mode, TransportMode::Train);
        assert!(evaluation.confidence.is_some());
    }

    #[test]
    fn test_rule_ids_in_evaluation_order() {
        let engine = InsightEngine::new();
        let ids = engine.rule_ids();

        assert_eq!(ids.first(), Some(&"weather-rain-indoors"));
        assert_eq!(ids.last(), Some(&"safety-share-itinerary"));
        assert_eq!(ids.len(), 11);
    }
}
