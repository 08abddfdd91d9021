//! Runtime configuration.
//!
//! A flat, string-keyed bag of loosely typed values. The generation core
//! reads two kinds of keys: `algorithm` (name of the registered
//! algorithm to run) and `weight_<evaluator_name>` (non-negative integer
//! evaluator weight, default 1). Values are read per use, so changes
//! apply to the next generation call without any restart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Algorithm used when the `algorithm` key is unset.
pub const DEFAULT_ALGORITHM: &str = "tree_fast";

/// Weight used when `weight_<evaluator>` is unset or not an integer.
pub const DEFAULT_WEIGHT: u64 = 1;

/// String-keyed configuration values.
///
/// Serializes as a flat JSON object, e.g.
/// `{"algorithm": "tree_slow", "weight_alternate_roles": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: HashMap<String, Value>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a value. Returns the previous value, if any.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// String value for a key, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Non-negative integer value for a key, if present and integral.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Name of the algorithm to run.
    pub fn algorithm(&self) -> &str {
        self.get_str("algorithm").unwrap_or(DEFAULT_ALGORITHM)
    }

    /// Weight of an evaluator (`weight_<name>`).
    pub fn weight(&self, evaluator_name: &str) -> u64 {
        self.get_u64(&format!("weight_{evaluator_name}"))
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.algorithm(), DEFAULT_ALGORITHM);
        assert_eq!(config.weight("alternate_roles"), 1);
        assert_eq!(config.get("algorithm"), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::new();
        config.set("algorithm", "simple");
        config.set("weight_alternate_roles", 3);

        assert_eq!(config.algorithm(), "simple");
        assert_eq!(config.weight("alternate_roles"), 3);
        assert_eq!(config.weight("maximize_rest_time"), 1);
    }

    #[test]
    fn test_unset_restores_default() {
        let mut config = Config::new();
        config.set("algorithm", "simple");
        config.unset("algorithm");
        assert_eq!(config.algorithm(), DEFAULT_ALGORITHM);
    }

    #[test]
    fn test_non_integer_weight_falls_back() {
        let mut config = Config::new();
        config.set("weight_alternate_roles", "heavy");
        assert_eq!(config.weight("alternate_roles"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"algorithm": "tree_slow", "weight_maximize_rest_time": 2}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.algorithm(), "tree_slow");
        assert_eq!(config.weight("maximize_rest_time"), 2);

        let back = serde_json::to_string(&config).unwrap();
        let reparsed: Config = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, config);
    }
}
