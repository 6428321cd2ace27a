// Adapters layer: concrete sleep primitives behind the `Sleeper` port.

#[cfg(unix)]
pub mod nanosleep;
pub mod thread;

#[cfg(unix)]
pub use nanosleep::NanosleepSleeper;
pub use thread::ThreadSleeper;

/// The high-resolution primitive of the current platform.
#[cfg(unix)]
pub type PlatformSleeper = NanosleepSleeper;
#[cfg(not(unix))]
pub type PlatformSleeper = ThreadSleeper;
