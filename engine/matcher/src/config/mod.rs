//! The config module contains the *struct* definitions required for configuring the matcher.
//! For example, it contains the definition of the Rule and Condition structs and the mapping
//! to serialize/deserialize them to/from json format.

pub mod rule;
