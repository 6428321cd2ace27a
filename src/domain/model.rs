use crate::utils::error::{Result, SleepError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A nanosecond count decomposed into whole seconds and a sub-second remainder.
///
/// Both parts are produced with truncating division, so
/// `seconds * NANOS_PER_SEC + nanos` always equals the original count. For
/// negative counts both parts are non-positive. `split` is the only
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDuration {
    seconds: i64,
    nanos: i64,
}

impl SplitDuration {
    pub fn split(nanoseconds: i64) -> Self {
        Self {
            seconds: nanoseconds / NANOS_PER_SEC,
            nanos: nanoseconds % NANOS_PER_SEC,
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> i64 {
        self.nanos
    }

    pub fn total_nanos(&self) -> i64 {
        self.seconds * NANOS_PER_SEC + self.nanos
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0 || self.nanos < 0
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// `None` for negative durations, which have no `Duration` counterpart.
    pub fn to_duration(&self) -> Option<Duration> {
        let secs = u64::try_from(self.seconds).ok()?;
        let nanos = u32::try_from(self.nanos).ok()?;
        Some(Duration::new(secs, nanos))
    }
}

impl fmt::Display for SplitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s+{}ns", self.seconds, self.nanos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    #[serde(alias = "nanoseconds")]
    Ns,
    #[serde(alias = "microseconds")]
    Us,
    #[serde(alias = "milliseconds")]
    Ms,
    #[serde(alias = "seconds")]
    S,
}

impl TimeUnit {
    pub fn nanos_per_unit(&self) -> i64 {
        match self {
            TimeUnit::Ns => 1,
            TimeUnit::Us => 1_000,
            TimeUnit::Ms => 1_000_000,
            TimeUnit::S => NANOS_PER_SEC,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
        }
    }

    /// Converts `value` in this unit to nanoseconds, failing on `i64` overflow.
    pub fn to_nanos(&self, value: i64) -> Result<i64> {
        value
            .checked_mul(self.nanos_per_unit())
            .ok_or(SleepError::Overflow {
                value,
                unit: self.as_str(),
            })
    }
}

impl FromStr for TimeUnit {
    type Err = SleepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanoseconds" => Ok(TimeUnit::Ns),
            "us" | "microseconds" => Ok(TimeUnit::Us),
            "ms" | "milliseconds" => Ok(TimeUnit::Ms),
            "s" | "seconds" => Ok(TimeUnit::S),
            other => Err(SleepError::InvalidConfigValueError {
                field: "unit".to_string(),
                value: other.to_string(),
                reason: "Valid units: ns, us, ms, s".to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the primitive wakes up before the requested time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterruptPolicy {
    /// Return after a single primitive call, even if it woke early.
    BestEffort,
    /// Keep sleeping on the remaining time until the full duration elapsed.
    #[default]
    UntilElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativePolicy {
    /// Treat the request as zero.
    #[default]
    Clamp,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SleepSettings {
    #[serde(default)]
    pub interrupt: InterruptPolicy,
    #[serde(default)]
    pub negative: NegativePolicy,
}

/// Result of a single call of the platform primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    Completed,
    Interrupted { remaining: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepReport {
    pub requested: SplitDuration,
    pub interruptions: u32,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_whole_and_fractional_seconds() {
        let split = SplitDuration::split(1_500_000_000);
        assert_eq!((split.seconds(), split.nanos()), (1, 500_000_000));
        let split = SplitDuration::split(999_999_999);
        assert_eq!((split.seconds(), split.nanos()), (0, 999_999_999));
        let split = SplitDuration::split(NANOS_PER_SEC);
        assert_eq!((split.seconds(), split.nanos()), (1, 0));
        assert!(SplitDuration::split(0).is_zero());
        assert!(!SplitDuration::split(1).is_zero());
    }

    #[test]
    fn test_split_recomposes_to_original() {
        let samples = [
            0,
            1,
            NANOS_PER_SEC - 1,
            NANOS_PER_SEC,
            12_345_678_901,
            i64::MAX,
            -1,
            -1_500_000_000,
            i64::MIN,
        ];
        for d in samples {
            let split = SplitDuration::split(d);
            assert_eq!(split.total_nanos(), d, "recompose {}", d);
            if d >= 0 {
                assert!((0..NANOS_PER_SEC).contains(&split.nanos()));
                assert_eq!(split.seconds(), d / NANOS_PER_SEC);
            }
        }
    }

    #[test]
    fn test_negative_split_truncates_toward_zero() {
        let split = SplitDuration::split(-1_500_000_000);
        assert_eq!(split.seconds(), -1);
        assert_eq!(split.nanos(), -500_000_000);
        assert!(split.is_negative());
        assert_eq!(split.to_duration(), None);
    }

    #[test]
    fn test_to_duration_keeps_multi_second_values_intact() {
        let split = SplitDuration::split(5_000_000_000);
        assert_eq!(split.to_duration(), Some(Duration::from_secs(5)));
        let split = SplitDuration::split(1_999_999_999);
        assert!(!split.is_negative());
        assert_eq!(split.to_duration(), Some(Duration::new(1, 999_999_999)));
        assert_eq!(
            split.to_duration().map(|d| d.as_nanos()),
            Some(split.total_nanos() as u128)
        );
    }

    #[test]
    fn test_to_duration() {
        let split = SplitDuration::split(2_000_000_003);
        assert_eq!(split.to_duration(), Some(Duration::new(2, 3)));
        assert_eq!(
            SplitDuration::split(i64::MAX).to_duration(),
            Some(Duration::from_nanos(i64::MAX as u64))
        );
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(TimeUnit::Ms.to_nanos(250).unwrap(), 250_000_000);
        assert_eq!(TimeUnit::S.to_nanos(-2).unwrap(), -2_000_000_000);
        assert_eq!(TimeUnit::Ns.to_nanos(i64::MAX).unwrap(), i64::MAX);

        let err = TimeUnit::S.to_nanos(i64::MAX / 10).unwrap_err();
        assert!(matches!(err, SleepError::Overflow { unit: "s", .. }));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("MS".parse::<TimeUnit>().unwrap(), TimeUnit::Ms);
        assert_eq!("seconds".parse::<TimeUnit>().unwrap(), TimeUnit::S);
        assert!("fortnights".parse::<TimeUnit>().is_err());
    }
}
