//! The `casematch_engine_matcher` crate contains the rule matching logic.

pub mod config;
pub mod context;
pub mod error;
pub mod matcher;
