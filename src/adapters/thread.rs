use crate::domain::model::SleepOutcome;
use crate::domain::ports::Sleeper;
use crate::utils::error::Result;
use std::thread;
use std::time::Duration;

/// Portable primitive. `std::thread::sleep` already resumes after early
/// wake-ups, so it never reports an interruption.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl ThreadSleeper {
    pub fn new() -> Self {
        Self
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep_once(&self, span: Duration) -> Result<SleepOutcome> {
        thread::sleep(span);
        Ok(SleepOutcome::Completed)
    }
}
