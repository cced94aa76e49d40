use crate::error::MatcherError;
use casematch_common_api::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MATCH_ON_KEY: &str = "matchOn";

/// One atomic test against the combined context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub path: String,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// One AND-clause of a rule: either a single Condition or an OR group of Conditions,
/// of which any one passing satisfies the clause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MatchOn {
    Single(Condition),
    AnyOf(Vec<Condition>),
}

/// A Rule with its parsed matchOn entries and the original JSON object it was read from.
/// The source object is what the matcher returns, unmodified, when the rule matches;
/// it carries the passthrough fields (action, id, name, ...) untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub match_on: Vec<MatchOn>,
    pub source: Value,
}

impl Rule {
    /// Parses a Rule from its JSON object. Returns `None` when the rule has no usable
    /// `matchOn` (absent, empty or not an array): such rules never match and are
    /// silently skipped by the matcher.
    pub fn from_value(value: &Value) -> Result<Option<Rule>, MatcherError> {
        let entries = match value.get(MATCH_ON_KEY) {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            _ => return Ok(None),
        };

        let mut match_on = Vec::with_capacity(entries.len());
        for entry in entries {
            let parsed: MatchOn = serde_json::from_value(entry.clone()).map_err(|e| {
                MatcherError::JsonDeserializationError {
                    message: format!("Cannot deserialize Rule matchOn entry. Error [{}]", e),
                }
            })?;
            match_on.push(parsed);
        }

        Ok(Some(Rule { match_on, source: value.clone() }))
    }

    pub fn from_json(json: &str) -> Result<Option<Rule>, MatcherError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            MatcherError::JsonDeserializationError {
                message: format!("Cannot deserialize Rule. Error [{}]", e),
            }
        })?;
        Rule::from_value(&value)
    }
}

/// Reads the rule list from its JSON value.
/// A falsy rules value (null, empty array, empty string, ...) yields an empty list;
/// a truthy value that is not an array is an `InvalidRuleListError`.
pub fn read_rule_list(rules: &Value) -> Result<Vec<Rule>, MatcherError> {
    if !is_truthy(rules) {
        return Ok(vec![]);
    }

    let items = match rules {
        Value::Array(items) => items,
        _ => {
            return Err(MatcherError::InvalidRuleListError {
                message: "Rule List is invalid!".to_owned(),
            })
        }
    };

    let mut parsed = vec![];
    for item in items {
        if let Some(rule) = Rule::from_value(item)? {
            parsed.push(rule);
        }
    }
    Ok(parsed)
}
