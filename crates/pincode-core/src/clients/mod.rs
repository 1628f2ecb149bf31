//! Client modules for external services

pub mod postal_pincode;

pub use postal_pincode::{parse_lookup_response, PincodeLookup, PostalPincodeClient};
