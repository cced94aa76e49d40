use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum MatcherError {
    #[error("InvalidRuleListError: [{message}]")]
    InvalidRuleListError { message: String },

    #[error("JsonDeserializationError: [{message}]")]
    JsonDeserializationError { message: String },

    #[error("ContainsNotApplicableError: Cannot check whether a value of type [{target_type}] contains a value of type [{needle_type}]")]
    ContainsNotApplicableError { target_type: &'static str, needle_type: &'static str },
}
