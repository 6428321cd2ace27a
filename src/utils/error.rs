use thiserror::Error;

#[derive(Error, Debug)]
pub enum SleepError {
    #[error("Negative sleep duration: {nanoseconds}ns")]
    NegativeDuration { nanoseconds: i64 },

    #[error("Duration overflow: {value}{unit} does not fit in 64-bit nanoseconds")]
    Overflow { value: i64, unit: &'static str },

    #[error("Sleep primitive failed (errno {errno}): {message}")]
    Platform { errno: i32, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl SleepError {
    pub fn platform(err: std::io::Error) -> Self {
        SleepError::Platform {
            errno: err.raw_os_error().unwrap_or(0),
            message: err.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SleepError::NegativeDuration { .. } => ErrorSeverity::Low,
            SleepError::Platform { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for the command line tool.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SleepError::NegativeDuration { nanoseconds } => {
                format!("Cannot sleep for a negative duration ({}ns)", nanoseconds)
            }
            SleepError::Overflow { value, unit } => {
                format!("{}{} is too long to express in nanoseconds", value, unit)
            }
            SleepError::Platform { message, .. } => {
                format!("The operating system refused to sleep: {}", message)
            }
            SleepError::IoError(e) => format!("Could not read file: {}", e),
            SleepError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            SleepError::ConfigError { message } => format!("Configuration problem: {}", message),
            SleepError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SleepError::NegativeDuration { .. } => {
                "Pass a non-negative duration or set negative_policy = \"clamp\""
            }
            SleepError::Overflow { .. } => "Use a smaller value or a finer unit",
            SleepError::Platform { .. } => "Check the process signal mask and system limits",
            SleepError::IoError(_) => "Make sure the file exists and is readable",
            SleepError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            SleepError::ConfigError { .. } | SleepError::InvalidConfigValueError { .. } => {
                "Review the configuration values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SleepError>;
