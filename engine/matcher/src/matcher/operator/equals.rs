use crate::error::MatcherError;
use crate::matcher::operator::Operator;
use serde_json::Value;

const OPERATOR_NAME: &str = "equals";

/// A matching matcher.operator that checks whether the leaf equals the condition value
#[derive(Debug)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    pub fn build(expected: Value) -> Equals {
        Equals { expected }
    }
}

impl Operator for Equals {
    fn name(&self) -> &str {
        OPERATOR_NAME
    }

    fn evaluate(&self, leaf: &Value) -> Result<bool, MatcherError> {
        Ok(&self.expected == leaf)
    }
}
