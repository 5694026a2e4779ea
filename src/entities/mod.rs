pub mod alert;
pub mod environmental_reading;
pub mod health_report;
pub mod submission;

pub use alert::{Alert, AlertPriority};
pub use environmental_reading::{EnvironmentalReading, FloodRisk};
pub use health_report::{HealthReport, WaterQuality};
pub use submission::Submission;
pub use water_test::{TestResult, WaterSource, WaterTest};
