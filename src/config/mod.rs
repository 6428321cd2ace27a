pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{InterruptPolicy, NegativePolicy, SleepSettings, TimeUnit};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "nsleep")]
#[command(about = "Suspend for a duration given in nanoseconds (or another unit)")]
pub struct CliConfig {
    /// Duration to sleep, in `--unit` (nanoseconds by default)
    #[arg(allow_negative_numbers = true)]
    pub duration: i64,

    #[arg(short, long, help = "Unit of DURATION: ns, us, ms or s")]
    pub unit: Option<TimeUnit>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Accept an early wake-up instead of sleeping the rest")]
    pub best_effort: bool,

    #[arg(long, help = "Fail on negative durations instead of treating them as zero")]
    pub reject_negative: bool,

    #[arg(long, help = "Report actual elapsed time")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// Flags given on the command line win over the file.
    pub fn settings(&self, file: &TomlConfig) -> SleepSettings {
        let mut settings = file.settings();
        if self.best_effort {
            settings.interrupt = InterruptPolicy::BestEffort;
        }
        if self.reject_negative {
            settings.negative = NegativePolicy::Reject;
        }
        settings
    }

    pub fn unit(&self, file: &TomlConfig) -> TimeUnit {
        self.unit.unwrap_or_else(|| file.unit())
    }

    pub fn nanoseconds(&self, file: &TomlConfig) -> Result<i64> {
        self.unit(file).to_nanos(self.duration)
    }

    pub fn monitoring_enabled(&self, file: &TomlConfig) -> bool {
        self.monitor || file.monitoring_enabled()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
