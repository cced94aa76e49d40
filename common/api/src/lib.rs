//! The `casematch_common_api` crate contains the shared value helpers used
//! by the matching engine and the entry point.

use serde_json::{Map, Value};

pub type Payload = Map<String, Value>;

/// Returns whether a JSON value is truthy in the sense of the rule language:
/// `null`, `false`, zero, the empty string, the empty array and the empty
/// object are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(boolean) => *boolean,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(array) => !array.is_empty(),
        Value::Object(object) => !object.is_empty(),
    }
}

/// Returns the JSON type name of a value, used to build error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_false_should_be_falsy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!(true)));
    }

    #[test]
    fn zero_should_be_falsy() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
    }

    #[test]
    fn empty_containers_should_be_falsy() {
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!("open")));
        assert!(is_truthy(&json!(["x"])));
        assert!(is_truthy(&json!({"key": "value"})));
    }

    #[test]
    fn should_return_the_value_type_name() {
        assert_eq!("null", value_type_name(&Value::Null));
        assert_eq!("bool", value_type_name(&json!(true)));
        assert_eq!("number", value_type_name(&json!(12)));
        assert_eq!("string", value_type_name(&json!("hello")));
        assert_eq!("array", value_type_name(&json!([1, 2])));
        assert_eq!("object", value_type_name(&json!({})));
    }
}
