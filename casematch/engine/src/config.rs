use casematch_common_logger::LoggerConfig;
use config_rs::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// The engine configuration, read from the process environment:
/// - `RULE_LIST` (required): the rule list as JSON text
/// - `CASE_DATA`, `EVENT_DATA`: the case/event payloads as JSON text
/// - `DEBUG_MODE`: when `true`, print the parsed inputs instead of evaluating
/// - `LOG_LEVEL`, `LOG_STDOUT`, `LOG_OUTPUT_FILE`: logger settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rule_list: Option<String>,
    pub case_data: Option<String>,
    pub event_data: Option<String>,
    pub debug_mode: Option<String>,

    pub log_level: Option<String>,
    pub log_stdout: Option<String>,
    pub log_output_file: Option<String>,
}

impl EngineConfig {
    pub fn is_debug_mode(&self) -> bool {
        flag_enabled(&self.debug_mode)
    }

    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.log_level.clone().unwrap_or_else(|| "info".to_owned()),
            // stdout is reserved for the JSON result; logging to it must be opted in
            stdout_output: flag_enabled(&self.log_stdout),
            file_output_path: self.log_output_file.clone(),
        }
    }
}

fn flag_enabled(value: &Option<String>) -> bool {
    value.as_deref().map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

pub fn build_config() -> Result<EngineConfig, ConfigError> {
    let mut s = Config::new();
    s.merge(Environment::new())?;
    s.try_into()
}
