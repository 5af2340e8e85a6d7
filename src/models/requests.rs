//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies. Typing the body
//! rejects malformed input (non-integer or negative `ttl`, non-JSON payloads)
//! before a handler ever runs; presence checks live in `validate`.

use serde::Deserialize;
use serde_json::Value;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for the store operation (POST /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value to store
/// - `ttl`: Optional TTL in seconds (uses the configured default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key; an absent field deserializes empty and fails validation
    #[serde(default)]
    pub key: String,
    /// The value to store; absent and explicit `null` are both rejected
    #[serde(default)]
    pub value: Option<Value>,
    /// Optional TTL in seconds, must be at least 1
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key and value are required".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} characters",
                MAX_KEY_LENGTH
            ));
        }
        match &self.value {
            None | Some(Value::Null) => {
                return Some("Key and value are required".to_string());
            }
            Some(_) => {}
        }
        if self.ttl == Some(0) {
            return Some("TTL must be a positive integer".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": {"n": 1}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, Some(json!({"n": 1})));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": 60}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(60));
    }

    #[test]
    fn test_set_request_missing_key_field() {
        // Absent key deserializes to "" and is caught by validate, not serde
        let json = r#"{"value": "v"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "");
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: Some(json!("test")),
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_missing_value() {
        let req = SetRequest {
            key: "key".to_string(),
            value: None,
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_null_value() {
        let req = SetRequest {
            key: "key".to_string(),
            value: Some(Value::Null),
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_zero_ttl() {
        let req = SetRequest {
            key: "key".to_string(),
            value: Some(json!(1)),
            ttl: Some(0),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_falsy_values_accepted() {
        // false, 0, "" and [] are meaningful JSON values, not missing ones
        for value in [json!(false), json!(0), json!(""), json!([])] {
            let req = SetRequest {
                key: "key".to_string(),
                value: Some(value),
                ttl: Some(60),
            };
            assert!(req.validate().is_none());
        }
    }

    #[test]
    fn test_validate_valid_request() {
        let req = SetRequest {
            key: "valid_key".to_string(),
            value: Some(json!({"nested": [1, 2, 3]})),
            ttl: Some(60),
        };
        assert!(req.validate().is_none());
    }
}
