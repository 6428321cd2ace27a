//! Early wake-up through a real signal handler. Runs in its own test process
//! because it installs a process-wide SIGUSR1 handler.
#![cfg(unix)]

use nsleep::adapters::NanosleepSleeper;
use nsleep::{InterruptPolicy, SleepEngine, SleepOutcome, SleepSettings, Sleeper};
use std::os::unix::thread::JoinHandleExt;
use std::sync::Once;
use std::thread;
use std::time::{Duration, Instant};

extern "C" fn on_sigusr1(_: libc::c_int) {}

fn install_handler() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = on_sigusr1 as extern "C" fn(libc::c_int) as libc::sighandler_t;
        action.sa_flags = 0;
        libc::sigemptyset(&mut action.sa_mask);
        assert_eq!(
            libc::sigaction(libc::SIGUSR1, &action, std::ptr::null_mut()),
            0
        );
    });
}

fn interrupt_after<T>(handle: &thread::JoinHandle<T>, delay: Duration) {
    thread::sleep(delay);
    let rc = unsafe { libc::pthread_kill(handle.as_pthread_t(), libc::SIGUSR1) };
    assert_eq!(rc, 0);
}

#[test]
fn test_nanosleep_reports_remaining_time() {
    install_handler();

    let handle = thread::spawn(|| NanosleepSleeper::new().sleep_once(Duration::from_secs(5)));
    interrupt_after(&handle, Duration::from_millis(200));

    match handle.join().unwrap().unwrap() {
        SleepOutcome::Interrupted { remaining } => {
            assert!(remaining > Duration::from_secs(3), "remaining {:?}", remaining);
            assert!(remaining < Duration::from_secs(5));
        }
        SleepOutcome::Completed => panic!("sleep was not interrupted"),
    }
}

#[test]
fn test_until_elapsed_sleeps_full_duration_despite_signal() {
    install_handler();

    let requested = Duration::from_millis(600);
    let handle = thread::spawn(move || {
        let start = Instant::now();
        let report = SleepEngine::new(NanosleepSleeper::new())
            .sleep(requested.as_nanos() as i64)
            .unwrap();
        (report, start.elapsed())
    });
    interrupt_after(&handle, Duration::from_millis(150));

    let (report, elapsed) = handle.join().unwrap();
    assert!(report.completed);
    assert_eq!(report.interruptions, 1);
    assert!(elapsed >= requested, "elapsed {:?}", elapsed);
}

#[test]
fn test_best_effort_returns_early_on_signal() {
    install_handler();

    let settings = SleepSettings {
        interrupt: InterruptPolicy::BestEffort,
        ..SleepSettings::default()
    };
    let handle = thread::spawn(move || {
        let start = Instant::now();
        let report = SleepEngine::with_settings(NanosleepSleeper::new(), settings)
            .sleep(5_000_000_000)
            .unwrap();
        (report, start.elapsed())
    });
    interrupt_after(&handle, Duration::from_millis(150));

    let (report, elapsed) = handle.join().unwrap();
    assert!(!report.completed);
    assert_eq!(report.interruptions, 1);
    assert!(elapsed < Duration::from_secs(4), "elapsed {:?}", elapsed);
}
