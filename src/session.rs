use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entities::{Alert, Submission};

/// Append-only submission and alert history for one dashboard session.
///
/// Lives for the lifetime of the server process; nothing is persisted.
/// Entries are never edited or removed once recorded.
#[derive(Debug, Default)]
pub struct SessionLog {
    submissions: Vec<Submission>,
    alerts: Vec<Alert>,
}

/// Handler-shared handle. Handlers may run on different tasks, so access to
/// the log is serialized behind a mutex.
pub type SharedSession = Arc<Mutex<SessionLog>>;

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn record_submission(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    pub fn record_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// The most recent `n` submissions in submission order, oldest first.
    pub fn recent_submissions(&self, n: usize) -> &[Submission] {
        let start = self.submissions.len().saturating_sub(n);
        &self.submissions[start..]
    }

    /// The most recent `n` alerts in creation order, oldest first.
    pub fn recent_alerts(&self, n: usize) -> &[Alert] {
        let start = self.alerts.len().saturating_sub(n);
        &self.alerts[start..]
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AlertPriority, HealthReport, WaterQuality};
    use chrono::Utc;
    use uuid::Uuid;

    fn submission(reporter: &str) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            report: HealthReport {
                date: Utc::now().date_naive(),
                location: "Village B".into(),
                symptom: "Fever".into(),
                case_count: 2,
                water_quality_observation: WaterQuality::Fair,
                reporter_id: reporter.into(),
            },
            comments: None,
        }
    }

    fn alert(message: &str) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            message: message.into(),
            priority: AlertPriority::Medium,
        }
    }

    #[test]
    fn submissions_keep_insertion_order() {
        let mut log = SessionLog::new();
        for id in ["ASHA 1", "ASHA 2", "ASHA 3"] {
            log.record_submission(submission(id));
        }
        let recent = log.recent_submissions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].report.reporter_id, "ASHA 2");
        assert_eq!(recent[1].report.reporter_id, "ASHA 3");
    }

    #[test]
    fn recent_window_larger_than_log_returns_everything() {
        let mut log = SessionLog::new();
        log.record_alert(alert("one"));
        assert_eq!(log.recent_alerts(5).len(), 1);
        assert_eq!(log.recent_submissions(5).len(), 0);
    }

    #[test]
    fn counts_track_appends() {
        let mut log = SessionLog::new();
        log.record_submission(submission("ASHA 4"));
        log.record_alert(alert("a"));
        log.record_alert(alert("b"));
        assert_eq!(log.submission_count(), 1);
        assert_eq!(log.alert_count(), 2);
    }
}
