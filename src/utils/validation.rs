use crate::utils::error::{Result, SleepError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Canonical spelling of a level, as accepted by `validate_log_level` and
/// written into the filter directive.
pub fn normalize_log_level(level: &str) -> String {
    level.trim().to_ascii_lowercase()
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&normalize_log_level(level).as_str()) {
        return Ok(());
    }
    Err(SleepError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: level.to_string(),
        reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SleepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SleepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
