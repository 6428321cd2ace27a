use crate::core::{
    InterruptPolicy, NegativePolicy, SleepOutcome, SleepReport, SleepSettings, Sleeper,
    SplitDuration,
};
use crate::utils::error::{Result, SleepError};

pub struct SleepEngine<S: Sleeper> {
    sleeper: S,
    settings: SleepSettings,
}

impl<S: Sleeper> SleepEngine<S> {
    pub fn new(sleeper: S) -> Self {
        Self::with_settings(sleeper, SleepSettings::default())
    }

    pub fn with_settings(sleeper: S, settings: SleepSettings) -> Self {
        Self { sleeper, settings }
    }

    pub fn settings(&self) -> SleepSettings {
        self.settings
    }

    /// Blocks the calling thread for `nanoseconds`, applying the configured
    /// negative-duration and interruption policies.
    pub fn sleep(&self, nanoseconds: i64) -> Result<SleepReport> {
        let requested = SplitDuration::split(nanoseconds);
        tracing::debug!("Sleep requested: {} ({}ns)", requested, nanoseconds);

        let mut report = SleepReport {
            requested,
            interruptions: 0,
            completed: true,
        };

        if requested.is_zero() {
            return Ok(report);
        }

        let Some(mut span) = requested.to_duration() else {
            return match self.settings.negative {
                NegativePolicy::Clamp => {
                    tracing::debug!("Negative duration clamped to zero");
                    Ok(report)
                }
                NegativePolicy::Reject => Err(SleepError::NegativeDuration { nanoseconds }),
            };
        };

        loop {
            match self.sleeper.sleep_once(span)? {
                SleepOutcome::Completed => break,
                SleepOutcome::Interrupted { remaining } => {
                    report.interruptions = report.interruptions.saturating_add(1);
                    tracing::debug!(
                        "Sleep interrupted, {:?} remaining (interruption #{})",
                        remaining,
                        report.interruptions
                    );
                    if remaining.is_zero() {
                        break;
                    }
                    if self.settings.interrupt == InterruptPolicy::BestEffort {
                        report.completed = false;
                        break;
                    }
                    span = remaining;
                }
            }
        }

        tracing::debug!(
            "Sleep finished: completed={}, interruptions={}",
            report.completed,
            report.interruptions
        );
        Ok(report)
    }
}
