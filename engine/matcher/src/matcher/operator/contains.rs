use crate::error::MatcherError;
use crate::matcher::operator::Operator;
use casematch_common_api::value_type_name;
use serde_json::Value;

const OPERATOR_NAME: &str = "contains";

/// A matching matcher.operator that checks whether the leaf contains the condition value.
/// Only text leaves support containment (substring test); the traversal consumes arrays
/// before the operator is reached, so a leaf is always a scalar here. Containment against
/// any other scalar type is a type error.
#[derive(Debug)]
pub struct Contains {
    needle: Value,
}

impl Contains {
    pub fn build(needle: Value) -> Contains {
        Contains { needle }
    }
}

impl Operator for Contains {
    fn name(&self) -> &str {
        OPERATOR_NAME
    }

    fn evaluate(&self, leaf: &Value) -> Result<bool, MatcherError> {
        match (leaf, &self.needle) {
            (Value::String(text), Value::String(needle)) => Ok(text.contains(needle.as_str())),
            (target, needle) => Err(MatcherError::ContainsNotApplicableError {
                target_type: value_type_name(target),
                needle_type: value_type_name(needle),
            }),
        }
    }
}
