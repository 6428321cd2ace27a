//! `nanosleep(2)` primitive.
//!
//! On success the call returns 0. If a signal handler interrupts it, the call
//! returns -1 with `errno == EINTR` and the kernel writes the time still left
//! into `rem`.

use crate::domain::model::SleepOutcome;
use crate::domain::ports::Sleeper;
use crate::utils::error::{Result, SleepError};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct NanosleepSleeper;

impl NanosleepSleeper {
    pub fn new() -> Self {
        Self
    }
}

fn to_timespec(span: Duration) -> libc::timespec {
    libc::timespec {
        tv_sec: libc::time_t::try_from(span.as_secs()).unwrap_or(libc::time_t::MAX),
        tv_nsec: span.subsec_nanos() as _,
    }
}

fn from_timespec(ts: &libc::timespec) -> Duration {
    let secs = u64::try_from(ts.tv_sec).unwrap_or(0);
    let nanos = u32::try_from(ts.tv_nsec).unwrap_or(0);
    Duration::new(secs, nanos)
}

impl Sleeper for NanosleepSleeper {
    fn sleep_once(&self, span: Duration) -> Result<SleepOutcome> {
        let request = to_timespec(span);
        let mut remain = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };

        // SAFETY: both pointers refer to live, properly aligned timespec values
        // for the duration of the call.
        let rc = unsafe { libc::nanosleep(&request, &mut remain) };
        if rc == 0 {
            return Ok(SleepOutcome::Completed);
        }

        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EINTR) {
            return Ok(SleepOutcome::Interrupted {
                remaining: from_timespec(&remain),
            });
        }
        Err(SleepError::platform(err))
    }
}
