use casematch_engine_matcher::error::MatcherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("ConfigurationError: [{message}]")]
    ConfigurationError { message: String },

    #[error("ValidationError: [{message}]")]
    ValidationError { message: String },

    #[error(transparent)]
    MatcherError(#[from] MatcherError),
}
