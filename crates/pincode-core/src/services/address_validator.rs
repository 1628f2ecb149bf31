//! Address validation service
//!
//! Ties the extractor, the PIN code lookup and the fuzzy scorer together.
//! Every failure along the way ends in a negative verdict rather than an
//! error, so callers always get a [`ValidationResult`] back.

use crate::clients::PincodeLookup;
use crate::constants::SIMILARITY_THRESHOLD;
use crate::services::fuzzy;
use crate::services::PincodeExtractor;
use crate::types::{AreaMatch, ValidationOutcome, ValidationResult};
use log::{debug, info, warn};
use std::sync::Arc;

pub struct AddressValidator {
    extractor: PincodeExtractor,
    lookup: Arc<dyn PincodeLookup>,
}

impl AddressValidator {
    pub fn new(lookup: Arc<dyn PincodeLookup>) -> Self {
        Self {
            extractor: PincodeExtractor::new(),
            lookup,
        }
    }

    /// Check that the address's PIN code belongs to an area named in it
    pub async fn validate(&self, address: &str) -> ValidationResult {
        let Some(pincode) = self.extractor.extract(address) else {
            info!("No PIN code in address: {}", address);
            return ValidationResult {
                address: address.to_string(),
                pincode: None,
                outcome: ValidationOutcome::MissingPincode,
            };
        };

        let areas = match self.lookup.area_names(&pincode).await {
            Ok(areas) if !areas.is_empty() => areas,
            Ok(_) => {
                warn!("PIN code {} lookup returned no areas", pincode);
                Vec::new()
            }
            Err(e) => {
                warn!("PIN code {} lookup failed: {}", pincode, e);
                Vec::new()
            }
        };

        if areas.is_empty() {
            return ValidationResult {
                address: address.to_string(),
                pincode: Some(pincode),
                outcome: ValidationOutcome::UnknownPincode,
            };
        }

        let best = fuzzy::extract_one(address, areas.as_slice());
        if let Some(best) = &best {
            debug!("PIN code {}: closest area '{}' scored {}", pincode, best.area, best.score);
        }

        let outcome = Self::judge(best);
        info!("PIN code {} verdict: {:?}", pincode, outcome);

        ValidationResult {
            address: address.to_string(),
            pincode: Some(pincode),
            outcome,
        }
    }

    /// Apply the similarity threshold to the closest area.
    ///
    /// The score must be strictly greater than [`SIMILARITY_THRESHOLD`].
    /// No candidate at all counts as a score of 0.
    pub fn judge(best: Option<AreaMatch>) -> ValidationOutcome {
        match best {
            Some(m) if m.score > SIMILARITY_THRESHOLD => ValidationOutcome::Valid {
                area: m.area,
                score: m.score,
            },
            closest => ValidationOutcome::AreaMismatch { closest },
        }
    }
}
