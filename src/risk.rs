use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{
    Alert, AlertPriority, EnvironmentalReading, HealthReport, TestResult, WaterQuality, WaterTest,
};

/// Reports and water tests older than this many days do not count.
const RECENT_WINDOW_DAYS: i64 = 7;
/// Rainfall is averaged over a shorter window since flooding risk decays fast.
const RAINFALL_WINDOW_DAYS: i64 = 3;

const HIGH_THRESHOLD: f64 = 50.0;
const MEDIUM_THRESHOLD: f64 = 20.0;

/// Outbreak risk tier. Ordering is Low < Medium < High.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Clamped to [0, 100].
    pub score: f64,
}

/// Aggregate the three surveillance datasets into a single risk score.
///
/// The score is the sum of three components, capped at 100:
/// - total cases reported in the last 7 days,
/// - 10 points per contaminated water test in the last 7 days,
/// - mean rainfall over the last 3 days divided by 10 (0 when no readings
///   fall inside the window).
///
/// `now` is injected by the caller; this function never reads the clock, so
/// identical inputs always produce identical output. Empty datasets score 0
/// rather than failing, since the dashboard must always show an answer.
pub fn assess(
    health_reports: &[HealthReport],
    water_tests: &[WaterTest],
    environmental_readings: &[EnvironmentalReading],
    now: DateTime<Utc>,
) -> RiskAssessment {
    let case_cutoff = (now - Duration::days(RECENT_WINDOW_DAYS)).date_naive();
    let rainfall_cutoff = (now - Duration::days(RAINFALL_WINDOW_DAYS)).date_naive();

    let case_score: f64 = health_reports
        .iter()
        .filter(|r| r.date > case_cutoff)
        .map(|r| f64::from(r.case_count))
        .sum();

    let contaminated = water_tests
        .iter()
        .filter(|t| t.date > case_cutoff && t.result == TestResult::Contaminated)
        .count();
    let water_score = contaminated as f64 * 10.0;

    let recent_rainfall: Vec<f64> = environmental_readings
        .iter()
        .filter(|e| e.date > rainfall_cutoff)
        .map(|e| e.rainfall)
        .collect();
    let rainfall_score = if recent_rainfall.is_empty() {
        0.0
    } else {
        recent_rainfall.iter().sum::<f64>() / recent_rainfall.len() as f64 / 10.0
    };

    let score = (case_score + water_score + rainfall_score).min(100.0);

    let tier = if score > HIGH_THRESHOLD {
        RiskTier::High
    } else if score > MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    RiskAssessment { tier, score }
}

/// Minimum case count that raises an alert on its own.
const ALERT_CASE_THRESHOLD: u32 = 5;
/// Case count at which an alert escalates to High priority.
const HIGH_PRIORITY_CASE_THRESHOLD: u32 = 10;

/// Decide whether a single submitted report warrants an alert.
///
/// Independent of `assess`: this looks at one report in isolation, so a
/// cluster of cases or a Poor water observation surfaces immediately
/// instead of waiting for the aggregate score to move.
pub fn evaluate_report(report: &HealthReport, now: DateTime<Utc>) -> Option<Alert> {
    let triggered = report.case_count >= ALERT_CASE_THRESHOLD
        || report.water_quality_observation == WaterQuality::Poor;
    if !triggered {
        return None;
    }

    let priority = if report.case_count >= HIGH_PRIORITY_CASE_THRESHOLD {
        AlertPriority::High
    } else {
        AlertPriority::Medium
    };

    Some(Alert {
        id: Uuid::new_v4(),
        timestamp: now,
        message: format!(
            "Alert: {} cases of {} reported in {}. Water quality: {}",
            report.case_count, report.symptom, report.location, report.water_quality_observation
        ),
        priority,
    })
}
