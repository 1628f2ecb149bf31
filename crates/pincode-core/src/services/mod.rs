//! Service modules for address validation

pub mod address_validator;
pub mod fuzzy;
pub mod pincode_extractor;

// Re-export service types
pub use address_validator::AddressValidator;
pub use pincode_extractor::PincodeExtractor;
