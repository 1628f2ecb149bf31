//! Pincode Core Library
//!
//! Checks that the PIN code written in a free-text Indian postal address
//! belongs to the area named in the same address. The PIN code is looked up
//! against the India Post directory and the returned office names are fuzzy
//! matched against the address.

pub mod config;
pub mod constants;
pub mod clients;
pub mod services;
pub mod types;
pub mod error;

// Re-export main types for easy access
pub use config::ValidatorConfig;
pub use error::{PincodeError, Result};

pub use clients::{PincodeLookup, PostalPincodeClient};

pub use services::{
    AddressValidator,
    PincodeExtractor,
};

pub use types::{
    AreaMatch,
    PinCode,
    ValidationOutcome,
    ValidationResult,
};
