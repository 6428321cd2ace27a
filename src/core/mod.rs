pub mod async_sleep;
pub mod blocking;
pub mod engine;

pub use crate::domain::model::{
    InterruptPolicy, NegativePolicy, SleepOutcome, SleepReport, SleepSettings, SplitDuration,
    TimeUnit,
};
pub use crate::domain::ports::Sleeper;
pub use crate::utils::error::Result;
