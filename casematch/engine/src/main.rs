pub mod config;
pub mod error;

use casematch_common_logger::setup_logger;
use casematch_engine_matcher::matcher::evaluate;
use error::EngineError;
use log::*;
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let engine_config = config::build_config()
        .map_err(|err| EngineError::ConfigurationError { message: format!("{}", err) })?;
    let _guard = setup_logger(&engine_config.logger())?;

    let output = run(&engine_config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Parses and validates the configured inputs and returns the JSON value to print:
/// the parsed inputs in debug mode, the matched rules otherwise.
fn run(engine_config: &config::EngineConfig) -> Result<Value, EngineError> {
    let rule_list_text = engine_config
        .rule_list
        .as_deref()
        .filter(|text| !text.is_empty())
        .ok_or_else(|| EngineError::ConfigurationError {
            message: "Missing environment variable: RULE_LIST".to_owned(),
        })?;

    let rules = parse_json_text(rule_list_text);
    let case_data = engine_config.case_data.as_deref().and_then(parse_json_text);
    let event_data = engine_config.event_data.as_deref().and_then(parse_json_text);

    if engine_config.is_debug_mode() {
        info!("Debug mode enabled. Printing the parsed inputs without evaluating.");
        return Ok(json!({
            "rules_list": rules,
            "case_data": case_data,
            "event_data": event_data,
        }));
    }

    let rules = match rules {
        Some(rules @ Value::Array(_)) => rules,
        _ => {
            return Err(EngineError::ValidationError { message: "Invalid Rules List!".to_owned() })
        }
    };

    if !(is_object(&case_data) || is_object(&event_data)) {
        return Err(EngineError::ValidationError {
            message: "Invalid Case or Event Data!".to_owned(),
        });
    }

    info!("Evaluating [{}] rules", rules.as_array().map(Vec::len).unwrap_or(0));
    let matched = evaluate(case_data.as_ref(), event_data.as_ref(), &rules)?;
    info!("[{}] rules matched", matched.len());

    Ok(Value::Array(matched))
}

// Lenient JSON parsing: text that is not valid JSON counts as absent, not as an error.
fn parse_json_text(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn is_object(value: &Option<Value>) -> bool {
    matches!(value, Some(Value::Object(_)))
}
