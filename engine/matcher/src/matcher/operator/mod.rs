//! The operator module contains the logic to build a Condition's leaf operator based
//! on its `matchType`.
//!
//! An *Operator* is applied to the scalar leaf reached by the path traversal and
//! determines whether the leaf satisfies the condition's value.

use crate::error::MatcherError;
use log::*;
use serde_json::Value;
use std::fmt;

pub mod contains;
pub mod equals;
pub mod false_operator;

pub const MATCH_TYPE_EQUALS: &str = "Equals";
pub const MATCH_TYPE_CONTAINS: &str = "Contains";

/// The Trait for a generic matcher.operator
pub trait Operator: fmt::Debug + Send + Sync {
    /// Returns the Operator name.
    fn name(&self) -> &str;

    /// Executes the current matcher.operator on a scalar leaf of the combined context
    /// and returns whether the leaf satisfies it.
    fn evaluate(&self, leaf: &Value) -> Result<bool, MatcherError>;
}

/// The Operator instance builder
#[derive(Default)]
pub struct OperatorBuilder {}

impl OperatorBuilder {
    pub fn new() -> OperatorBuilder {
        OperatorBuilder {}
    }

    /// Returns a specific Operator instance based on the condition's `matchType`.
    /// An unknown match type builds the `False` operator: it can never be satisfied,
    /// whatever leaf the traversal reaches.
    pub fn build(&self, match_type: &str, match_value: Value) -> Box<dyn Operator> {
        let result: Box<dyn Operator> = match match_type {
            MATCH_TYPE_EQUALS => {
                Box::new(crate::matcher::operator::equals::Equals::build(match_value))
            }
            MATCH_TYPE_CONTAINS => {
                Box::new(crate::matcher::operator::contains::Contains::build(match_value))
            }
            _ => Box::new(crate::matcher::operator::false_operator::False {}),
        };

        trace!(
            "OperatorBuilder - build: return matcher.operator [{:?}] for match type [{}]",
            &result,
            match_type
        );
        result
    }
}
