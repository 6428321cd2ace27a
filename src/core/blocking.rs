use crate::adapters::PlatformSleeper;
use crate::core::engine::SleepEngine;
use crate::core::{SleepReport, SleepSettings, TimeUnit};
use crate::utils::error::Result;

/// Suspends the calling thread for at least `nanoseconds`.
///
/// Negative durations are treated as zero and early wake-ups are resumed
/// until the full duration has elapsed. Nothing is reported to the caller;
/// a failing primitive is logged and the call returns.
pub fn sleep_for_nanoseconds(nanoseconds: i64) {
    if let Err(e) = try_sleep_for_nanoseconds(nanoseconds, SleepSettings::default()) {
        tracing::warn!("Sleep of {}ns failed: {}", nanoseconds, e);
    }
}

pub fn try_sleep_for_nanoseconds(nanoseconds: i64, settings: SleepSettings) -> Result<SleepReport> {
    SleepEngine::with_settings(PlatformSleeper::default(), settings).sleep(nanoseconds)
}

/// Millisecond convenience over [`sleep_for_nanoseconds`]. Requests beyond the
/// nanosecond range saturate.
pub fn sleep_for_milliseconds(milliseconds: i64) {
    let nanoseconds = TimeUnit::Ms
        .to_nanos(milliseconds)
        .unwrap_or(if milliseconds < 0 { i64::MIN } else { i64::MAX });
    sleep_for_nanoseconds(nanoseconds);
}
