pub mod condition;
pub mod operator;

use crate::config::rule::{self, MatchOn};
use crate::context::CombinedContext;
use crate::error::MatcherError;
use condition::ConditionMatcher;
use log::*;
use operator::OperatorBuilder;
use serde_json::Value;

/// The Matcher's internal Rule representation, which contains the condition matchers
/// built from the config::rule::Rule together with the original rule object.
struct MatcherRule {
    match_on: Vec<MatchOnMatcher>,
    source: Value,
}

enum MatchOnMatcher {
    Single(ConditionMatcher),
    AnyOf(Vec<ConditionMatcher>),
}

impl MatchOnMatcher {
    fn build(entry: &MatchOn, builder: &OperatorBuilder) -> MatchOnMatcher {
        match entry {
            MatchOn::Single(condition) => {
                MatchOnMatcher::Single(ConditionMatcher::build(condition, builder))
            }
            MatchOn::AnyOf(conditions) => MatchOnMatcher::AnyOf(
                conditions.iter().map(|c| ConditionMatcher::build(c, builder)).collect(),
            ),
        }
    }

    // An OR group always resolves to a definite result: true on the first matching
    // condition, false otherwise, even when every member is vacuous.
    fn evaluate(&self, context: &Value) -> Result<Option<bool>, MatcherError> {
        match self {
            MatchOnMatcher::Single(condition) => condition.evaluate(context),
            MatchOnMatcher::AnyOf(conditions) => {
                for condition in conditions {
                    if condition.evaluate(context)? == Some(true) {
                        return Ok(Some(true));
                    }
                }
                Ok(Some(false))
            }
        }
    }
}

/// The Matcher contains the core logic of the casematch engine.
/// It matches a combined case/event context against the defined Rules.
/// A Matcher instance is stateless and thread-safe once built; each process call with
/// its own context is independent.
pub struct Matcher {
    rules: Vec<MatcherRule>,
}

impl Matcher {
    /// Builds a new Matcher from the rule list JSON value.
    /// A falsy rules value yields an empty Matcher; a truthy non-array value fails with
    /// an `InvalidRuleListError`. Rules without a usable `matchOn` are skipped.
    pub fn build(rules: &Value) -> Result<Matcher, MatcherError> {
        debug!("Matcher build start");

        let operator_builder = OperatorBuilder::new();
        let mut matcher_rules = vec![];

        for parsed in rule::read_rule_list(rules)? {
            trace!("Matcher build - processing rule definition:\n{:?}", parsed.source);
            matcher_rules.push(MatcherRule {
                match_on: parsed
                    .match_on
                    .iter()
                    .map(|entry| MatchOnMatcher::build(entry, &operator_builder))
                    .collect(),
                source: parsed.source,
            });
        }

        debug!("Matcher build completed with [{}] rules", matcher_rules.len());
        Ok(Matcher { rules: matcher_rules })
    }

    /// Processes the combined context and returns the original rule objects whose
    /// matchOn was satisfied, in input order.
    pub fn process(&self, context: &CombinedContext) -> Result<Vec<Value>, MatcherError> {
        trace!("Matcher process - processing context: [{:?}]", context.value());

        let mut matched = vec![];
        for matcher_rule in &self.rules {
            if Matcher::rule_matches(matcher_rule, context.value())? {
                trace!("Matcher process - context matches rule: [{:?}]", &matcher_rule.source);
                matched.push(matcher_rule.source.clone());
            }
        }
        Ok(matched)
    }

    // All entry results are collected before combining, so an error raised by a later
    // entry surfaces even when an earlier entry already evaluated false.
    // The rule matches iff no entry is false and at least one entry is true; entries
    // that are undetermined (vacuous conditions) count for neither side.
    fn rule_matches(matcher_rule: &MatcherRule, context: &Value) -> Result<bool, MatcherError> {
        let mut results = Vec::with_capacity(matcher_rule.match_on.len());
        for entry in &matcher_rule.match_on {
            results.push(entry.evaluate(context)?);
        }
        Ok(!results.contains(&Some(false)) && results.contains(&Some(true)))
    }
}

/// One-shot driver: builds the Matcher, assembles the combined context and returns
/// the matched rule objects.
pub fn evaluate(
    case_data: Option<&Value>,
    event_data: Option<&Value>,
    rules: &Value,
) -> Result<Vec<Value>, MatcherError> {
    let matcher = Matcher::build(rules)?;
    let context = CombinedContext::new(case_data, event_data);
    matcher.process(&context)
}
