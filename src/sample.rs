//! Synthetic surveillance data for demo sessions.
//!
//! Everything here is generated, not ingested; the server has no real data
//! sources. Generators take an explicit RNG handle so a fixed seed
//! reproduces the exact same datasets, which the tests rely on.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entities::{
    EnvironmentalReading, FloodRisk, HealthReport, TestResult, WaterQuality, WaterSource,
    WaterTest,
};

pub const VILLAGES: [&str; 4] = ["Village A", "Village B", "Village C", "Village D"];
pub const SYMPTOMS: [&str; 5] = ["Fever", "Diarrhea", "Vomiting", "Dehydration", "Stomach pain"];
pub const WATER_LOCATIONS: [&str; 5] = [
    "Location A",
    "Location B",
    "Location C",
    "Location D",
    "Location E",
];

const HEALTH_REPORT_COUNT: usize = 50;
const TESTS_PER_LOCATION: usize = 10;
const ENV_HISTORY_DAYS: i64 = 30;

/// The three datasets the dashboard is built on.
#[derive(Debug, Clone)]
pub struct SampleDatasets {
    pub health_reports: Vec<HealthReport>,
    pub water_tests: Vec<WaterTest>,
    pub environmental_readings: Vec<EnvironmentalReading>,
}

impl SampleDatasets {
    /// Generate all three datasets from one seed, anchored to `today`.
    pub fn generate(seed: u64, today: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            health_reports: generate_health_reports(&mut rng, today),
            water_tests: generate_water_tests(&mut rng, today),
            environmental_readings: generate_environmental_readings(&mut rng, today),
        }
    }
}

pub fn generate_health_reports<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<HealthReport> {
    let water_qualities = [WaterQuality::Good, WaterQuality::Fair, WaterQuality::Poor];
    (0..HEALTH_REPORT_COUNT)
        .map(|_| HealthReport {
            date: today - Duration::days(rng.gen_range(0..30)),
            location: VILLAGES[rng.gen_range(0..VILLAGES.len())].to_string(),
            symptom: SYMPTOMS[rng.gen_range(0..SYMPTOMS.len())].to_string(),
            case_count: rng.gen_range(1..10),
            water_quality_observation: water_qualities[rng.gen_range(0..water_qualities.len())],
            reporter_id: format!("ASHA {}", rng.gen_range(1..10)),
        })
        .collect()
}

pub fn generate_water_tests<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<WaterTest> {
    let results = [TestResult::Safe, TestResult::Contaminated];
    let sources = [
        WaterSource::Well,
        WaterSource::Tap,
        WaterSource::Pond,
        WaterSource::River,
    ];
    let mut tests = Vec::with_capacity(WATER_LOCATIONS.len() * TESTS_PER_LOCATION);
    for location in WATER_LOCATIONS {
        for _ in 0..TESTS_PER_LOCATION {
            tests.push(WaterTest {
                date: today - Duration::days(rng.gen_range(0..30)),
                location: location.to_string(),
                result: results[rng.gen_range(0..results.len())],
                contamination_level: rng.gen_range(0..100),
                source_type: sources[rng.gen_range(0..sources.len())],
            });
        }
    }
    tests
}

pub fn generate_environmental_readings<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
) -> Vec<EnvironmentalReading> {
    let risks = [FloodRisk::Low, FloodRisk::Medium, FloodRisk::High];
    let mut readings = Vec::with_capacity(VILLAGES.len() * ENV_HISTORY_DAYS as usize);
    for location in VILLAGES {
        // One reading per day over the trailing month, most recent last.
        for day in (1..=ENV_HISTORY_DAYS).rev() {
            readings.push(EnvironmentalReading {
                date: today - Duration::days(day),
                location: location.to_string(),
                rainfall: rng.gen_range(0..50) as f64,
                temperature: rng.gen_range(20..40) as f64,
                flood_risk: risks[rng.gen_range(0..risks.len())],
            });
        }
    }
    readings
}
