// file: src/utils/telemetry.rs
// description: operation timing and health reporting for the model-backed contracts
// reference: Production observability best practices

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Calls slower than this are logged as warnings.
pub const SLOW_MODEL_CALL: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl HealthStatus {
    fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub message: Option<String>,
}

impl HealthCheck {
    pub fn healthy(component: &str) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Healthy,
            message: None,
        }
    }

    pub fn degraded(component: &str, message: String) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Degraded,
            message: Some(message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: String,
    pub version: String,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>) -> Self {
        let status = if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            status,
            checks,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Local readiness only; the model provider is never contacted.
    pub fn for_config(config: &Config) -> Self {
        let credentials = if config.has_api_key() {
            HealthCheck::healthy("model credentials")
        } else {
            HealthCheck::degraded(
                "model credentials",
                "No API key configured; retrieval and translation calls will fail".to_string(),
            )
        };

        let model = HealthCheck {
            component: "model".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} via {}", config.llm.model, config.llm.base_url)),
        };

        Self::new(vec![credentials, model])
    }

    pub fn format(&self) -> String {
        let mut output = format!(
            "{} WisdomWell Health: {:?}\nVersion: {}\nTimestamp: {}\n\n",
            self.status.icon(),
            self.status,
            self.version,
            self.timestamp
        );

        for check in &self.checks {
            output.push_str(&format!(
                "{} {} ({:?})",
                check.status.icon(),
                check.component,
                check.status
            ));

            if let Some(ref msg) = check.message {
                output.push_str(&format!("\n  {}", msg));
            }

            output.push('\n');
        }

        output
    }
}

/// Logs start, finish and slowness of one operation.
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        self.warn_if_slow(SLOW_MODEL_CALL);
        info!(
            "Completed operation: {} in {:.2}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        self.warn_if_slow(SLOW_MODEL_CALL);
        info!(
            "Completed operation: {} - {} items in {:.2}s",
            self.operation,
            count,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    fn warn_if_slow(&self, threshold: Duration) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}] took {:.2}s (threshold: {:.2}s)",
                self.operation,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report_overall_status() {
        let checks = vec![
            HealthCheck::healthy("model"),
            HealthCheck::degraded("model credentials", "missing".to_string()),
        ];
        assert_eq!(HealthReport::new(checks).status, HealthStatus::Degraded);

        let checks = vec![HealthCheck::healthy("a"), HealthCheck::healthy("b")];
        assert_eq!(HealthReport::new(checks).status, HealthStatus::Healthy);
    }

    #[test]
    fn test_health_report_for_config() {
        let mut config = Config::default_config();
        assert_eq!(
            HealthReport::for_config(&config).status,
            HealthStatus::Degraded
        );

        config.llm.api_key = Some("key".to_string());
        let report = HealthReport::for_config(&config);
        assert_eq!(report.status, HealthStatus::Healthy);
        assert!(report.format().contains("openai/gpt-oss-120b"));
    }

    #[test]
    fn test_health_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}
