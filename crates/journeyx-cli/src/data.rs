//! Bundled sample data for the demo commands
//!
//! Mirrors the fixtures the product pages render: five destination readings,
//! the canonical three-option journey listing, and the regional advisory
//! list. All of it is static demo data; the engine itself never sees
//! anything but the assembled facts.

use journeyx_core::{ComfortLevel, Reliability, TransportMode, TransportOption, WeatherReading};

/// A bundled destination: one day's reading plus its content tags
pub struct CityConditions {
    pub city: &'static str,
    pub country: &'static str,
    pub temperature: f64,
    pub condition: &'static str,
    pub wind_speed: f64,
    pub humidity: f64,
    pub tags: &'static [&'static str],
}

impl CityConditions {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading {
            temperature: self.temperature,
            condition: self.condition.to_string(),
            wind_speed: self.wind_speed,
            humidity: self.humidity,
        }
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_string()).collect()
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

pub const CITIES: &[CityConditions] = &[
    CityConditions {
        city: "Paris",
        country: "France",
        temperature: 22.0,
        condition: "Partly Cloudy",
        wind_speed: 12.0,
        humidity: 65.0,
        tags: &["CityBreak", "Museums"],
    },
    CityConditions {
        city: "Tokyo",
        country: "Japan",
        temperature: 28.0,
        condition: "Sunny",
        wind_speed: 8.0,
        humidity: 70.0,
        tags: &["CityBreak", "Foodie"],
    },
    CityConditions {
        city: "New York",
        country: "USA",
        temperature: 18.0,
        condition: "Rainy",
        wind_speed: 15.0,
        humidity: 80.0,
        tags: &["CityBreak", "Nightlife"],
    },
    CityConditions {
        city: "Sydney",
        country: "Australia",
        temperature: 26.0,
        condition: "Clear",
        wind_speed: 10.0,
        humidity: 55.0,
        tags: &["BeachParadise", "Coastal"],
    },
    CityConditions {
        city: "Cairo",
        country: "Egypt",
        temperature: 35.0,
        condition: "Hot",
        wind_speed: 14.0,
        humidity: 40.0,
        tags: &["Desert", "HistoricSites"],
    },
];

pub fn find_city(name: &str) -> Option<&'static CityConditions> {
    CITIES.iter().find(|c| c.city.eq_ignore_ascii_case(name))
}

/// The canonical journey listing from the cost comparison card:
/// a fast weather-sensitive flight, a steady train, a cheap slow bus.
pub fn journey_options() -> Vec<TransportOption> {
    vec![
        TransportOption::new(TransportMode::Flight, 420.0, 150)
            .with_comfort(ComfortLevel::High)
            .with_reliability(Reliability::WeatherSensitive)
            .with_solo_friendly(true),
        TransportOption::new(TransportMode::Train, 180.0, 345)
            .with_comfort(ComfortLevel::High)
            .with_solo_friendly(true),
        TransportOption::new(TransportMode::Bus, 95.0, 500),
    ]
}

/// A static regional safety advisory
pub struct RegionAdvisory {
    pub region: &'static str,
    pub risk: &'static str,
    pub notice: &'static str,
}

pub const REGION_ADVISORIES: &[RegionAdvisory] = &[
    RegionAdvisory {
        region: "Southeast Asia Coastal",
        risk: "Moderate",
        notice: "Monsoon season July to September. Indoor alternatives recommended for afternoons.",
    },
    RegionAdvisory {
        region: "Western Mediterranean",
        risk: "Low",
        notice: "Optimal conditions. Low risk for natural events during this season.",
    },
    RegionAdvisory {
        region: "Caribbean Islands",
        risk: "Moderate",
        notice: "Hurricane season active June to November. Monitor weather alerts daily.",
    },
    RegionAdvisory {
        region: "Japanese Coastal Regions",
        risk: "Moderate",
        notice: "Active seismic zone. Familiarize yourself with earthquake safety procedures.",
    },
];
