pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{PlatformSleeper, ThreadSleeper};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    async_sleep::sleep_for_nanoseconds_async,
    blocking::{sleep_for_milliseconds, sleep_for_nanoseconds, try_sleep_for_nanoseconds},
    engine::SleepEngine,
};
pub use domain::model::{
    InterruptPolicy, NegativePolicy, SleepOutcome, SleepReport, SleepSettings, SplitDuration,
    TimeUnit, NANOS_PER_SEC,
};
pub use domain::ports::Sleeper;
pub use utils::error::{Result, SleepError};
