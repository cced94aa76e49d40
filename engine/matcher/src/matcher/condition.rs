use crate::config::rule::Condition;
use crate::error::MatcherError;
use crate::matcher::operator::{Operator, OperatorBuilder};
use casematch_common_api::is_truthy;
use serde_json::Value;

/// A single compiled Condition: the split path segments plus the leaf operator.
///
/// Evaluation returns a three-valued result: `Some(true)` / `Some(false)` when the
/// condition is determined, `None` when it is vacuous (absent or empty `matchType`,
/// or a falsy condition value). A vacuous condition neither satisfies nor
/// disqualifies the rule entry that holds it.
#[derive(Debug)]
pub struct ConditionMatcher {
    path: Vec<String>,
    vacuous: bool,
    operator: Box<dyn Operator>,
}

impl ConditionMatcher {
    pub fn build(condition: &Condition, builder: &OperatorBuilder) -> ConditionMatcher {
        let match_type = condition.match_type.as_deref().unwrap_or("");
        let vacuous = match_type.is_empty() || !is_truthy(&condition.value);
        ConditionMatcher {
            path: condition.path.split('.').map(str::to_owned).collect(),
            vacuous,
            operator: builder.build(match_type, condition.value.clone()),
        }
    }

    /// Evaluates the condition against the combined context.
    pub fn evaluate(&self, context: &Value) -> Result<Option<bool>, MatcherError> {
        if self.vacuous {
            return Ok(None);
        }
        self.check(context, &self.path).map(Some)
    }

    // Recursive traversal:
    // - mappings consume one path segment, a missing segment (or an exhausted path) fails;
    // - sequences fan the remaining path out to every element, any match wins;
    // - scalar leaves are handed to the operator, ignoring any remaining segments.
    fn check(&self, context: &Value, path: &[String]) -> Result<bool, MatcherError> {
        match context {
            Value::Object(map) => match path.first().and_then(|segment| map.get(segment)) {
                Some(child) => self.check(child, &path[1..]),
                None => Ok(false),
            },
            Value::Array(items) => {
                for item in items {
                    if self.check(item, path)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            leaf => self.operator.evaluate(leaf),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use serde_json::json;

    fn matcher(path: &str, match_type: Option<&str>, value: Value) -> ConditionMatcher {
        let condition = Condition {
            path: path.to_owned(),
            match_type: match_type.map(str::to_owned),
            value,
        };
        ConditionMatcher::build(&condition, &OperatorBuilder::new())
    }

    #[test]
    fn should_match_a_nested_scalar() {
        let context = json!({"case": {"status": "open"}, "event": null});

        let condition = matcher("case.status", Some("Equals"), json!("open"));

        assert_eq!(Some(true), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_not_match_a_different_scalar() {
        let context = json!({"case": {"status": "closed"}, "event": null});

        let condition = matcher("case.status", Some("Equals"), json!("open"));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_not_match_a_missing_path_segment() {
        let context = json!({"case": {}, "event": null});

        let condition = matcher("case.status", Some("Equals"), json!("open"));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_not_match_when_the_path_ends_on_a_mapping() {
        let context = json!({"case": {"status": {"code": "open"}}, "event": null});

        let condition = matcher("case.status", Some("Equals"), json!("open"));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_compare_the_leaf_even_with_remaining_segments() {
        // the traversal hands a scalar to the operator as soon as it reaches one
        let context = json!({"case": {"status": "open"}, "event": null});

        let condition = matcher("case.status.code", Some("Equals"), json!("open"));

        assert_eq!(Some(true), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_fan_out_over_a_list_of_mappings() {
        let context = json!({"event": {"items": [{"id": 1}, {"id": 2}]}});

        let condition = matcher("event.items.id", Some("Equals"), json!(2));

        assert_eq!(Some(true), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn fan_out_should_fail_when_no_element_matches() {
        let context = json!({"event": {"items": [{"id": 1}, {"id": 2}]}});

        let condition = matcher("event.items.id", Some("Equals"), json!(3));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn contains_should_apply_to_the_elements_of_a_list_leaf() {
        let context = json!({"event": {"tags": ["x", "y", "z"]}});

        let condition = matcher("event.tags", Some("Contains"), json!("y"));

        assert_eq!(Some(true), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_be_vacuous_without_a_match_type() {
        let context = json!({"case": {"status": "open"}});

        let condition = matcher("case.status", None, json!("open"));

        assert_eq!(None, condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_be_vacuous_with_an_empty_match_type() {
        let context = json!({"case": {"status": "open"}});

        let condition = matcher("case.status", Some(""), json!("open"));

        assert_eq!(None, condition.evaluate(&context).unwrap());
    }

    #[test]
    fn should_be_vacuous_with_a_falsy_value() {
        let context = json!({"case": {"status": ""}});

        assert_eq!(None, matcher("case.status", Some("Equals"), json!("")).evaluate(&context).unwrap());
        assert_eq!(None, matcher("case.status", Some("Equals"), json!(0)).evaluate(&context).unwrap());
        assert_eq!(None, matcher("case.status", Some("Equals"), Value::Null).evaluate(&context).unwrap());
    }

    #[test]
    fn unknown_match_type_should_evaluate_to_false_not_vacuous() {
        let context = json!({"case": {"status": "open"}});

        let condition = matcher("case.status", Some("StartsWith"), json!("open"));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn contains_on_a_number_leaf_should_raise_a_type_error() {
        let context = json!({"event": {"count": 5}});

        let condition = matcher("event.count", Some("Contains"), json!("5"));

        assert!(condition.evaluate(&context).is_err());
    }

    #[test]
    fn fan_out_should_short_circuit_before_a_failing_element() {
        // the second element would raise a type error, but the first one already matches
        let context = json!({"event": {"tags": ["y", 7]}});

        let condition = matcher("event.tags", Some("Contains"), json!("y"));

        assert_eq!(Some(true), condition.evaluate(&context).unwrap());
    }

    #[test]
    fn fan_out_should_propagate_an_error_from_an_unmatched_element() {
        let context = json!({"event": {"tags": [7, "y"]}});

        let condition = matcher("event.tags", Some("Contains"), json!("y"));

        assert!(condition.evaluate(&context).is_err());
    }

    #[test]
    fn an_empty_path_should_not_match_a_mapping() {
        let context = json!({"case": {}});

        let condition = matcher("", Some("Equals"), json!("open"));

        assert_eq!(Some(false), condition.evaluate(&context).unwrap());
    }
}
