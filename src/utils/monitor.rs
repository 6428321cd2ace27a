use crate::domain::model::SleepReport;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct SleepStats {
    pub requested: Duration,
    pub elapsed: Duration,
    pub overshoot: Duration,
    pub undershoot: Duration,
}

/// Wall-clock measurement around a sleep call.
pub struct SleepMonitor {
    start_time: Instant,
    enabled: bool,
}

impl SleepMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn stats(&self, requested: Duration) -> SleepStats {
        let elapsed = self.start_time.elapsed();
        SleepStats {
            requested,
            elapsed,
            overshoot: elapsed.saturating_sub(requested),
            undershoot: requested.saturating_sub(elapsed),
        }
    }

    pub fn log_stats(&self, report: &SleepReport) {
        if !self.enabled {
            return;
        }
        let requested = report.requested.to_duration().unwrap_or_default();
        let stats = self.stats(requested);
        tracing::info!(
            "📊 Requested: {:?}, Elapsed: {:?}, Overshoot: {:?}, Interruptions: {}",
            stats.requested,
            stats.elapsed,
            stats.overshoot,
            report.interruptions
        );
        if !stats.undershoot.is_zero() {
            tracing::warn!("⚠️ Woke {:?} early", stats.undershoot);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SleepMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_measure_elapsed_time() {
        let monitor = SleepMonitor::new(true);
        std::thread::sleep(Duration::from_millis(20));
        let stats = monitor.stats(Duration::from_millis(10));
        assert!(stats.elapsed >= Duration::from_millis(20));
        assert!(stats.overshoot >= Duration::from_millis(10));
        assert!(stats.undershoot.is_zero());
    }

    #[test]
    fn test_undershoot_when_requested_exceeds_elapsed() {
        let monitor = SleepMonitor::default();
        assert!(!monitor.is_enabled());
        let stats = monitor.stats(Duration::from_secs(60));
        assert!(stats.undershoot > Duration::from_secs(59));
    }
}
