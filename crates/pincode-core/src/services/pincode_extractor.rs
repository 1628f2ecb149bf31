//! PIN code extraction service

use crate::types::PinCode;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also accept other scripts' digits
static PINCODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{6}\b").expect("PIN code regex is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct PincodeExtractor;

impl PincodeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Find the PIN code in a free-text address.
    ///
    /// Returns the first standalone run of exactly six digits. Later
    /// candidates are ignored, so an address carrying two PIN codes is judged
    /// by the one written first.
    pub fn extract(&self, address: &str) -> Option<PinCode> {
        PINCODE_REGEX
            .find(address)
            .and_then(|m| PinCode::parse(m.as_str()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(address: &str) -> Option<String> {
        PincodeExtractor::new().extract(address).map(|p| p.as_str().to_string())
    }

    #[test]
    fn test_extract_trailing_pincode() {
        assert_eq!(
            extract("Mysore Bank Colony, Banashankari 3rd Stage, Bengaluru, Karnataka 560050"),
            Some("560050".to_string())
        );
    }

    #[test]
    fn test_extract_without_pincode() {
        assert_eq!(extract("Mysore Bank Colony, Bengaluru, Karnataka"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_extract_ignores_other_digit_runs() {
        // 5 and 7 digit runs are not PIN codes
        assert_eq!(extract("Plot 56005, Phone 5600501, Bengaluru"), None);
        assert_eq!(extract("Plot 56005, Phone 5600501, Bengaluru 560095"), Some("560095".to_string()));
    }

    #[test]
    fn test_extract_requires_word_boundaries() {
        assert_eq!(extract("Ref KA560050 Bengaluru"), None);
        assert_eq!(extract("PIN:560050."), Some("560050".to_string()));
    }

    #[test]
    fn test_extract_picks_first_of_several() {
        assert_eq!(
            extract("Old PIN 560095, new PIN 560050, Bengaluru"),
            Some("560095".to_string())
        );
    }
}
