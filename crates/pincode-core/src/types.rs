//! Common types used throughout the validator

use crate::error::{PincodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Six ASCII digits identifying an Indian postal delivery area
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinCode(String);

impl PinCode {
    /// Parse a bare PIN code. Region and numeric range are not checked.
    pub fn parse(code: &str) -> Result<Self> {
        if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code.to_string()))
        } else {
            Err(PincodeError::Validation(format!(
                "PIN code must be exactly 6 digits, got '{}'",
                code
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of the India Post lookup response array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PincodeLookupResponse {
    #[serde(rename = "Message", default)]
    pub message: Option<String>,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "PostOffice", default)]
    pub post_office: Option<Vec<PostOffice>>,
}

/// Post office entry listed under a PIN code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostOffice {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Best-scoring candidate area for an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaMatch {
    pub area: String,
    /// Weighted-ratio similarity, 0-100
    pub score: u8,
}

/// Why an address passed or failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid { area: String, score: u8 },
    MissingPincode,
    UnknownPincode,
    AreaMismatch { closest: Option<AreaMatch> },
}

/// Verdict for a single address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub address: String,
    pub pincode: Option<PinCode>,
    pub outcome: ValidationOutcome,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, ValidationOutcome::Valid { .. })
    }

    /// Human-readable verdict message
    pub fn message(&self) -> String {
        match &self.outcome {
            ValidationOutcome::Valid { area, .. } => {
                format!("Valid address. Closest area match: {}", area)
            }
            ValidationOutcome::MissingPincode => "No PIN code found in the address.".to_string(),
            ValidationOutcome::UnknownPincode => "Invalid or non-existent PIN code.".to_string(),
            ValidationOutcome::AreaMismatch { .. } => {
                "Area name does not match the given pincode. Please check the address.".to_string()
            }
        }
    }

    /// The boolean + message pair
    pub fn verdict(&self) -> (bool, String) {
        (self.is_valid(), self.message())
    }
}
