use crate::error::MatcherError;
use crate::matcher::operator::Operator;
use serde_json::Value;

const OPERATOR_NAME: &str = "false";

/// A matching matcher.operator that always evaluates to false.
/// It backs conditions whose `matchType` is not a known operator: the traversal still
/// runs, but no leaf can satisfy the condition.
#[derive(Debug)]
pub struct False {}

impl Operator for False {
    fn name(&self) -> &str {
        OPERATOR_NAME
    }

    fn evaluate(&self, _leaf: &Value) -> Result<bool, MatcherError> {
        Ok(false)
    }
}
