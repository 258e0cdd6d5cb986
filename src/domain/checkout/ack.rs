//! Acknowledgement codes returned in the `ACK` field.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Acknowledgement status of an Express Checkout API call.
///
/// Unknown codes are kept verbatim in [`AckCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AckCode {
    /// The call completed.
    Success,

    /// The call completed, with warnings in the `L_*` fields.
    SuccessWithWarning,

    /// The call failed; error details are in the `L_*` fields.
    Failure,

    /// The call failed, with additional warnings.
    FailureWithWarning,

    /// Any other value PayPal may send.
    Other(String),
}

impl AckCode {
    /// Returns the code as PayPal spells it.
    pub fn as_str(&self) -> &str {
        match self {
            AckCode::Success => "Success",
            AckCode::SuccessWithWarning => "SuccessWithWarning",
            AckCode::Failure => "Failure",
            AckCode::FailureWithWarning => "FailureWithWarning",
            AckCode::Other(code) => code,
        }
    }

    /// True when the code mentions `Success` (case-sensitive).
    pub fn is_success(&self) -> bool {
        self.as_str().contains("Success")
    }

    /// True when the code mentions `Failure` (case-sensitive).
    pub fn is_failure(&self) -> bool {
        self.as_str().contains("Failure")
    }

    /// True for the `*WithWarning` variants.
    pub fn has_warning(&self) -> bool {
        matches!(self, AckCode::SuccessWithWarning | AckCode::FailureWithWarning)
    }
}

impl From<&str> for AckCode {
    fn from(value: &str) -> Self {
        match value {
            "Success" => AckCode::Success,
            "SuccessWithWarning" => AckCode::SuccessWithWarning,
            "Failure" => AckCode::Failure,
            "FailureWithWarning" => AckCode::FailureWithWarning,
            other => AckCode::Other(other.to_string()),
        }
    }
}

impl From<String> for AckCode {
    fn from(value: String) -> Self {
        AckCode::from(value.as_str())
    }
}

impl From<AckCode> for String {
    fn from(code: AckCode) -> Self {
        match code {
            AckCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for AckCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AckCode::from(s))
    }
}

impl std::fmt::Display for AckCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_parse() {
        assert_eq!(AckCode::from("Success"), AckCode::Success);
        assert_eq!(AckCode::from("SuccessWithWarning"), AckCode::SuccessWithWarning);
        assert_eq!(AckCode::from("Failure"), AckCode::Failure);
        assert_eq!(AckCode::from("FailureWithWarning"), AckCode::FailureWithWarning);
    }

    #[test]
    fn unknown_code_is_kept_verbatim() {
        let code: AckCode = "PartialSuccess".parse().unwrap();
        assert_eq!(code, AckCode::Other("PartialSuccess".to_string()));
        assert_eq!(code.as_str(), "PartialSuccess");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let code = AckCode::from("success");
        assert!(matches!(code, AckCode::Other(_)));
        assert!(!code.is_success());
    }

    #[test]
    fn success_with_warning_is_success_not_failure() {
        assert!(AckCode::SuccessWithWarning.is_success());
        assert!(!AckCode::SuccessWithWarning.is_failure());
        assert!(AckCode::SuccessWithWarning.has_warning());
    }

    #[test]
    fn failure_with_warning_is_failure_not_success() {
        assert!(AckCode::FailureWithWarning.is_failure());
        assert!(!AckCode::FailureWithWarning.is_success());
        assert!(AckCode::FailureWithWarning.has_warning());
    }

    #[test]
    fn other_codes_use_substring_rules() {
        assert!(AckCode::from("PartialSuccess").is_success());
        assert!(!AckCode::from("Pending").is_success());
        assert!(!AckCode::from("Pending").is_failure());
    }

    #[test]
    fn display_matches_wire_spelling() {
        assert_eq!(AckCode::SuccessWithWarning.to_string(), "SuccessWithWarning");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&AckCode::FailureWithWarning).unwrap();
        assert_eq!(json, "\"FailureWithWarning\"");

        let json = serde_json::to_string(&AckCode::Other("Pending".to_string())).unwrap();
        assert_eq!(json, "\"Pending\"");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let code: AckCode = serde_json::from_str("\"Success\"").unwrap();
        assert_eq!(code, AckCode::Success);

        let code: AckCode = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(code, AckCode::Other("Pending".to_string()));
    }
}
