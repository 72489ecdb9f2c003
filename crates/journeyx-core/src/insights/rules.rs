//! Declarative condition-to-insight rules
//!
//! Each rule pairs a predicate over the fact model with an insight emitter.
//! Rules carry a priority (lower runs first) and may join an exclusive
//! group, where the first successful emission suppresses the rest of the
//! group for that evaluation.

use std::fmt;

use crate::error::Result;
use crate::facts::{FactModel, SkyCondition};
use crate::insights::types::{Insight, InsightCategory, Severity};

type RulePredicate = dyn Fn(&FactModel) -> Result<bool> + Send + Sync;
type RuleEmit = dyn Fn(&FactModel) -> Result<Insight> + Send + Sync;

/// One declarative condition-to-insight rule
pub struct Rule {
    id: String,
    priority: i32,
    exclusive_group: Option<String>,
    predicate: Box<RulePredicate>,
    emit: Box<RuleEmit>,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        priority: i32,
        predicate: impl Fn(&FactModel) -> Result<bool> + Send + Sync + 'static,
        emit: impl Fn(&FactModel) -> Result<Insight> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            priority,
            exclusive_group: None,
            predicate: Box::new(predicate),
            emit: Box::new(emit),
        }
    }

    /// Places the rule in an exclusive group
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.exclusive_group = Some(group.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn exclusive_group(&self) -> Option<&str> {
        self.exclusive_group.as_deref()
    }

    pub fn applies(&self, facts: &FactModel) -> Result<bool> {
        (self.predicate)(facts)
    }

    pub fn emit(&self, facts: &FactModel) -> Result<Insight> {
        (self.emit)(facts)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("exclusive_group", &self.exclusive_group)
            .finish()
    }
}

/// An ordered collection of rules
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in travel advisory catalogue
    pub fn travel_defaults() -> Self {
        let mut set = Self::empty();

        // Weather advisories
        set.register(Rule::new(
            "weather-rain-indoors",
            10,
            |facts| Ok(facts.weather().is_some_and(|w| w.condition == SkyCondition::Rain)),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Weather,
                    Severity::Caution,
                    "Rain expected today",
                    "Indoor plans recommended for afternoon. Museums and covered markets are good options.",
                ))
            },
        ));

        set.register(Rule::new(
            "weather-heat-advisory",
            20,
            |facts| Ok(facts.weather().is_some_and(|w| w.temperature_c > 32.0)),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Health,
                    Severity::Warning,
                    "High heat advisory",
                    "Stay hydrated. Avoid outdoor activities 11 AM - 3 PM. Carry sunscreen.",
                ))
            },
        ));

        set.register(Rule::new(
            "weather-strong-wind",
            30,
            |facts| Ok(facts.weather().is_some_and(|w| w.wind_speed_kph > 20.0)),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Safety,
                    Severity::Caution,
                    "Strong winds forecasted",
                    "Outdoor activities may be challenging. Secure loose items and avoid coastal areas.",
                ))
            },
        ));

        set.register(Rule::new(
            "weather-ideal-outdoors",
            40,
            |facts| {
                Ok(facts.weather().is_some_and(|w| {
                    w.condition == SkyCondition::Clear
                        && (18.0..=28.0).contains(&w.temperature_c)
                }))
            },
            |_| {
                Ok(Insight::new(
                    InsightCategory::Opportunity,
                    Severity::Info,
                    "Perfect for outdoor exploration",
                    "Ideal for hiking, sightseeing, and photography. Sunrise 6:15 AM, sunset 7:45 PM.",
                ))
            },
        ));

        set.register(Rule::new(
            "weather-high-humidity",
            50,
            |facts| Ok(facts.weather().is_some_and(|w| w.humidity_pct > 75.0)),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Comfort,
                    Severity::Info,
                    "High humidity levels",
                    "Pace yourself during activities. Lightweight clothing recommended.",
                ))
            },
        ));

        // Solo-safety tag advisories. Exclusive group: the first matching
        // rule speaks for the destination.
        set.register(
            Rule::new(
                "tags-weather-check",
                60,
                |facts| {
                    Ok(facts.content().is_some_and(|c| {
                        c.any_tag_contains("rain") || c.any_tag_contains("monsoon")
                    }))
                },
                |_| {
                    Ok(Insight::new(
                        InsightCategory::Weather,
                        Severity::Caution,
                        "Weather check advised",
                        "Rainy-season destination. Check the forecast daily and keep indoor alternatives ready.",
                    ))
                },
            )
            .in_group("solo-safety"),
        );

        set.register(
            Rule::new(
                "tags-first-timer-beach",
                61,
                |facts| {
                    Ok(facts.content().is_some_and(|c| {
                        c.any_tag_contains("beach") || c.any_tag_contains("paradise")
                    }))
                },
                |_| {
                    Ok(Insight::new(
                        InsightCategory::Safety,
                        Severity::Info,
                        "Good for first-time solo travelers",
                        "Relaxed pace, established traveler routes, and easy logistics.",
                    ))
                },
            )
            .in_group("solo-safety"),
        );

        set.register(
            Rule::new(
                "tags-guide-recommended",
                62,
                |facts| {
                    Ok(facts.content().is_some_and(|c| {
                        c.any_tag_contains("hike")
                            || c.any_tag_contains("trail")
                            || c.any_tag_contains("mountain")
                    }))
                },
                |_| {
                    Ok(Insight::new(
                        InsightCategory::Safety,
                        Severity::Caution,
                        "Better with a local guide",
                        "Trails and terrain here are safest with a local guide. Arrange one before heading out.",
                    ))
                },
            )
            .in_group("solo-safety"),
        );

        // Group default: fires for any destination with content when no
        // more specific tag rule matched.
        set.register(
            Rule::new(
                "tags-solo-friendly",
                63,
                |facts| Ok(facts.content().is_some()),
                |_| {
                    Ok(Insight::new(
                        InsightCategory::Safety,
                        Severity::Info,
                        "Solo-friendly destination",
                        "Well suited to independent travel. Keep the usual precautions in mind.",
                    ))
                },
            )
            .in_group("solo-safety"),
        );

        // Always-on guidance
        set.register(Rule::new(
            "planning-landmark-timing",
            900,
            |_| Ok(true),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Planning,
                    Severity::Info,
                    "Best time to visit landmarks",
                    "Major attractions are less crowded before 9 AM and after 5 PM.",
                ))
            },
        ));

        // Highest priority value, so it lands last in every evaluation
        set.register(Rule::new(
            "safety-share-itinerary",
            1000,
            |_| Ok(true),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Safety,
                    Severity::Info,
                    "Solo traveler safety tip",
                    "Share your itinerary with someone you trust. Keep emergency contacts saved offline.",
                ))
            },
        ));

        set
    }

    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules by ascending priority. Stable, so rules sharing a priority
    /// keep registration order.
    pub fn in_priority_order(&self) -> Vec<&Rule> {
        let mut ordered: Vec<&Rule> = self.rules.iter().collect();
        ordered.sort_by_key(|r| r.priority());
        ordered
    }

    /// Rule ids in evaluation order
    pub fn ids(&self) -> Vec<&str> {
        self.in_priority_order().iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::WeatherReading;

    fn weather_model(temperature: f64, condition: &str, wind_speed: f64, humidity: f64) -> FactModel {
        FactModel::builder()
            .weather(&WeatherReading {
                temperature,
                condition: condition.to_string(),
                wind_speed,
                humidity,
            })
            .build()
    }

    fn tag_model(tags: &[&str]) -> FactModel {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        FactModel::builder().content(&tags, "Test City").build()
    }

    fn rule_by_id<'a>(set: &'a RuleSet, id: &str) -> &'a Rule {
        set.in_priority_order()
            .into_iter()
            .find(|r| r.id() == id)
            .unwrap()
    }

    #[test]
    fn test_travel_defaults_catalogue() {
        let set = RuleSet::travel_defaults();
        assert_eq!(set.len(), 11);
        assert_eq!(set.ids().first(), Some(&"weather-rain-indoors"));
        assert_eq!(set.ids().last(), Some(&"safety-share-itinerary"));
    }

    #[test]
    fn test_rain_rule() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "weather-rain-indoors");

        assert!(rule.applies(&weather_model(18.0, "Rainy", 15.0, 80.0)).unwrap());
        assert!(!rule.applies(&weather_model(18.0, "Sunny", 15.0, 80.0)).unwrap());
        assert!(!rule.applies(&FactModel::default()).unwrap());
    }

    #[test]
    fn test_heat_rule_boundary() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "weather-heat-advisory");

        assert!(!rule.applies(&weather_model(32.0, "Hot", 5.0, 40.0)).unwrap());
        assert!(rule.applies(&weather_model(32.1, "Hot", 5.0, 40.0)).unwrap());
        assert!(rule.applies(&weather_model(35.0, "Hot", 5.0, 40.0)).unwrap());
    }

    #[test]
    fn test_wind_rule_boundary() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "weather-strong-wind");

        assert!(!rule.applies(&weather_model(20.0, "Windy", 20.0, 50.0)).unwrap());
        assert!(rule.applies(&weather_model(20.0, "Windy", 20.5, 50.0)).unwrap());
    }

    #[test]
    fn test_ideal_rule_needs_clear_and_mild() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "weather-ideal-outdoors");

        assert!(rule.applies(&weather_model(18.0, "Clear", 5.0, 50.0)).unwrap());
        assert!(rule.applies(&weather_model(28.0, "Sunny", 5.0, 50.0)).unwrap());
        assert!(!rule.applies(&weather_model(17.9, "Clear", 5.0, 50.0)).unwrap());
        assert!(!rule.applies(&weather_model(28.1, "Clear", 5.0, 50.0)).unwrap());
        assert!(!rule.applies(&weather_model(22.0, "Partly Cloudy", 5.0, 50.0)).unwrap());
    }

    #[test]
    fn test_humidity_rule_boundary() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "weather-high-humidity");

        assert!(!rule.applies(&weather_model(22.0, "Cloudy", 5.0, 75.0)).unwrap());
        assert!(rule.applies(&weather_model(22.0, "Cloudy", 5.0, 76.0)).unwrap());
    }

    #[test]
    fn test_tag_rules_match_substrings() {
        let set = RuleSet::travel_defaults();

        let beach = tag_model(&["BeachParadise", "HiddenGem"]);
        assert!(!rule_by_id(&set, "tags-weather-check").applies(&beach).unwrap());
        assert!(rule_by_id(&set, "tags-first-timer-beach").applies(&beach).unwrap());
        assert!(!rule_by_id(&set, "tags-guide-recommended").applies(&beach).unwrap());

        let monsoon = tag_model(&["MonsoonSeason"]);
        assert!(rule_by_id(&set, "tags-weather-check").applies(&monsoon).unwrap());

        let trek = tag_model(&["MountainTrail"]);
        assert!(rule_by_id(&set, "tags-guide-recommended").applies(&trek).unwrap());
    }

    #[test]
    fn test_solo_friendly_default_needs_content() {
        let set = RuleSet::travel_defaults();
        let rule = rule_by_id(&set, "tags-solo-friendly");

        assert!(rule.applies(&tag_model(&[])).unwrap());
        assert!(!rule.applies(&FactModel::default()).unwrap());
    }

    #[test]
    fn test_always_on_rules_ignore_facts() {
        let set = RuleSet::travel_defaults();
        let empty = FactModel::default();

        assert!(rule_by_id(&set, "planning-landmark-timing").applies(&empty).unwrap());
        assert!(rule_by_id(&set, "safety-share-itinerary").applies(&empty).unwrap());
    }

    #[test]
    fn test_priority_order_is_stable_within_ties() {
        let mut set = RuleSet::empty();
        for id in ["first", "second", "third"] {
            set.register(Rule::new(
                id,
                5,
                |_| Ok(true),
                |_| {
                    Ok(Insight::new(
                        InsightCategory::Planning,
                        Severity::Info,
                        "t",
                        "m",
                    ))
                },
            ));
        }

        assert_eq!(set.ids(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_in_group_builder() {
        let rule = Rule::new(
            "custom",
            7,
            |_| Ok(true),
            |_| {
                Ok(Insight::new(
                    InsightCategory::Safety,
                    Severity::Info,
                    "t",
                    "m",
                ))
            },
        )
        .in_group("solo-safety");

        assert_eq!(rule.exclusive_group(), Some("solo-safety"));
        assert_eq!(rule.priority(), 7);
    }
}
