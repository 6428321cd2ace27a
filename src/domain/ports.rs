use crate::domain::model::SleepOutcome;
use crate::utils::error::Result;
use std::time::Duration;

/// One call of a platform blocking-sleep primitive.
///
/// Implementations block the calling thread only and must report an early
/// wake-up instead of hiding it, so the caller can decide whether to retry.
pub trait Sleeper: Send + Sync {
    fn sleep_once(&self, span: Duration) -> Result<SleepOutcome>;
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep_once(&self, span: Duration) -> Result<SleepOutcome> {
        (**self).sleep_once(span)
    }
}
