use crate::domain::model::{InterruptPolicy, NegativePolicy, SleepSettings, TimeUnit};
use crate::utils::error::{Result, SleepError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sleep: SleepSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SleepSection {
    pub interrupt_policy: Option<InterruptPolicy>,
    pub negative_policy: Option<NegativePolicy>,
    pub unit: Option<TimeUnit>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
    pub monitor: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，佔位符取自行程環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// 以 `lookup` 解析 `${VAR}` 佔位符後再解析 TOML
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換佔位符 (例如 ${NSLEEP_POLICY})，未定義的變數保持原樣
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SleepError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn settings(&self) -> SleepSettings {
        SleepSettings {
            interrupt: self.sleep.interrupt_policy.unwrap_or_default(),
            negative: self.sleep.negative_policy.unwrap_or_default(),
        }
    }

    pub fn unit(&self) -> TimeUnit {
        self.sleep.unit.unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.monitor)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
