//! The context module builds the combined lookup structure the conditions are
//! evaluated against: the normalized case section under `"case"` and the event
//! record under `"event"`.

use casematch_common_api::Payload;
use log::*;
use serde_json::Value;

pub const CASE_KEY: &str = "case";
pub const EVENT_KEY: &str = "event";
pub const CUSTOM_FIELDS_KEY: &str = "custom_fields";
const FIELD_KEY: &str = "key";
const FIELD_VALUE: &str = "value";

/// The combined `{"case": ..., "event": ...}` context.
/// It is built once per matching session and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedContext {
    value: Value,
}

impl CombinedContext {
    /// Builds the combined context from the raw case and event records.
    /// The case side is normalized (custom fields flattened into
    /// `case.custom_fields`); the event side is taken as given, `null` when absent.
    pub fn new(case_data: Option<&Value>, event_data: Option<&Value>) -> Self {
        let mut root = Payload::new();
        root.insert(CASE_KEY.to_owned(), normalized_case_section(case_data));
        root.insert(EVENT_KEY.to_owned(), event_data.cloned().unwrap_or(Value::Null));
        CombinedContext { value: Value::Object(root) }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Returns the case record's `"case"` sub-object with the flattened custom fields
/// merged in, or an empty object when the record has no usable `"case"` entry.
/// The input record is left untouched.
fn normalized_case_section(case_data: Option<&Value>) -> Value {
    let case_record = match case_data {
        Some(record) => record,
        None => return Value::Object(Payload::new()),
    };

    let mut section = match case_record.get(CASE_KEY) {
        Some(Value::Object(section)) => section.clone(),
        // a non-mapping "case" value passes through untouched
        Some(other) => return other.clone(),
        None => Payload::new(),
    };

    if let Some(flattened) = flattened_custom_fields(case_record) {
        trace!("CombinedContext - merging [{}] flattened custom fields into the case section", flattened.len());
        match section.get_mut(CUSTOM_FIELDS_KEY) {
            Some(Value::Object(existing)) => {
                for (key, value) in flattened {
                    existing.insert(key, value);
                }
            }
            _ => {
                section.insert(CUSTOM_FIELDS_KEY.to_owned(), Value::Object(flattened));
            }
        }
    }

    Value::Object(section)
}

/// Flattens the record's `custom_fields` mapping of `{key, value}` entries into a
/// direct key -> value mapping. Returns `None` when `custom_fields` is absent or
/// not a mapping; entries without a string `"key"` are skipped.
fn flattened_custom_fields(case_record: &Value) -> Option<Payload> {
    let fields = match case_record.get(CUSTOM_FIELDS_KEY) {
        Some(Value::Object(fields)) => fields,
        _ => return None,
    };

    let mut flattened = Payload::new();
    for entry in fields.values() {
        match entry.get(FIELD_KEY) {
            Some(Value::String(key)) => {
                let value = entry.get(FIELD_VALUE).cloned().unwrap_or(Value::Null);
                flattened.insert(key.clone(), value);
            }
            _ => {
                debug!("CombinedContext - skipping custom field entry without a string key: [{:?}]", entry);
            }
        }
    }
    Some(flattened)
}
