//! Structured error document returned by the management API

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

/// Error code the management API uses for a missing resource
pub const NOT_FOUND_CODE: i64 = 1004;

/// Error payload of a failed management API call
///
/// Serialized as `<error>` in XML and as a plain object in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "error", default)]
pub struct ApiError {
    /// Error code assigned by the management API
    pub code: i64,

    /// Human readable description of the error
    pub description: String,

    /// Additional error information
    pub details: String,

    /// Whether the failed request may be retried
    pub retryable: bool,
}

impl ApiError {
    /// The sentinel error for a missing resource
    pub fn not_found() -> Self {
        Self {
            code: NOT_FOUND_CODE,
            description: "not found".to_string(),
            ..Default::default()
        }
    }

    /// Error code reported by the server, zero when absent
    pub fn status_code(&self) -> i64 {
        self.code
    }

    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE
    }

    /// Match this error against `target`.
    ///
    /// Another `ApiError` matches when the codes are equal. Any other error
    /// matches when its message equals this error's message, which is
    /// `description` or `description: details`. Callers written against
    /// plain message errors keep working this way.
    pub fn is(&self, target: &(dyn StdError + 'static)) -> bool {
        match target.downcast_ref::<ApiError>() {
            Some(other) => self.code == other.code,
            None => target.to_string() == self.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = if self.description.is_empty() {
            "Unknown"
        } else {
            &self.description
        };
        if self.details.is_empty() {
            write!(f, "{description}")
        } else {
            write!(f, "{description}: {}", self.details)
        }
    }
}

impl StdError for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Plain(&'static str);

    impl std::fmt::Display for Plain {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl StdError for Plain {}

    fn error(code: i64, description: &str, details: &str) -> ApiError {
        ApiError {
            code,
            description: description.to_string(),
            details: details.to_string(),
            retryable: false,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            error(404, "description", "details").to_string(),
            "description: details"
        );
        assert_eq!(
            error(0, "description", "details").to_string(),
            "description: details"
        );
        assert_eq!(error(0, "", "details").to_string(), "Unknown: details");
        assert_eq!(error(0, "description", "").to_string(), "description");
        assert_eq!(ApiError::default().to_string(), "Unknown");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(error(404, "", "").status_code(), 404);
        assert_eq!(ApiError::default().status_code(), 0);
    }

    #[test]
    fn test_is_same_code() {
        assert!(error(404, "", "").is(&error(404, "", "")));
        assert!(!error(404, "", "").is(&error(505, "", "")));
    }

    #[test]
    fn test_is_plain_error_message() {
        assert!(error(404, "not found", "").is(&Plain("not found")));
        assert!(
            error(404, "not found", "something is missing")
                .is(&Plain("not found: something is missing"))
        );
        assert!(!error(404, "not found", "something is missing").is(&Plain("not found")));
        assert!(!error(404, "", "").is(&Plain("wrong error")));
    }

    #[test]
    fn test_not_found_sentinel() {
        let sentinel = ApiError::not_found();
        assert!(sentinel.is_not_found());
        assert!(error(NOT_FOUND_CODE, "bucket missing", "").is(&sentinel));
    }

    #[test]
    fn test_xml_round_trip() {
        let xml = "<error><code>1004</code><description>Unable to find entity</description>\
                   <details>bucket missing</details><retryable>false</retryable></error>";
        let decoded: ApiError = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(decoded.code, NOT_FOUND_CODE);
        assert_eq!(decoded.to_string(), "Unable to find entity: bucket missing");
    }

    #[test]
    fn test_json_ignores_unknown_fields() {
        let decoded: ApiError = serde_json::from_str(r#"{"Description":"Forbidden"}"#).unwrap();
        assert_eq!(decoded, ApiError::default());
    }
}
