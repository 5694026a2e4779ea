use crate::entities::AlertPriority;
use crate::sample::SampleDatasets;

/// Seed the dataset-size gauges once at startup. The datasets are fixed for
/// the lifetime of the process, so these never move afterwards.
pub fn init_metrics(datasets: &SampleDatasets) {
    metrics::gauge!("healthwatch_health_reports_total")
        .set(datasets.health_reports.len() as f64);
    metrics::gauge!("healthwatch_water_tests_total").set(datasets.water_tests.len() as f64);
    metrics::gauge!("healthwatch_environmental_readings_total")
        .set(datasets.environmental_readings.len() as f64);

    tracing::info!(
        "Initialized metrics: HealthReports={}, WaterTests={}, EnvironmentalReadings={}",
        datasets.health_reports.len(),
        datasets.water_tests.len(),
        datasets.environmental_readings.len()
    );
}

pub fn increment_submissions() {
    metrics::counter!("healthwatch_submissions_total").increment(1);
}

pub fn increment_alerts(priority: AlertPriority) {
    metrics::counter!("healthwatch_alerts_total", "priority" => priority.as_str()).increment(1);
}
