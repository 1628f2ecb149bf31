//! Integration tests against the live India Post PIN code directory
//!
//! Run with: cargo test --features integration --test test_real_service

#![cfg(feature = "integration")]

use pincode_core::config::PostalApiConfig;
use pincode_core::{AddressValidator, PinCode, PincodeLookup, PostalPincodeClient};
use std::sync::Arc;

fn live_client() -> PostalPincodeClient {
    PostalPincodeClient::new(PostalApiConfig::default()).expect("Failed to build HTTP client")
}

#[tokio::test]
async fn test_known_pincode_lists_areas() {
    let client = live_client();
    let pin = PinCode::parse("560050").unwrap();

    let areas = client.area_names(&pin).await.expect("Lookup should succeed");

    println!("560050 areas: {:?}", areas);
    assert!(areas.iter().any(|a| a.contains("Banashankari")));
}

#[tokio::test]
async fn test_unknown_pincode_fails() {
    let client = live_client();
    let pin = PinCode::parse("000000").unwrap();

    assert!(client.area_names(&pin).await.is_err());
}

#[tokio::test]
async fn test_sample_addresses() {
    let validator = AddressValidator::new(Arc::new(live_client()));

    let valid = validator
        .validate("2nd Phase, 374/B, 80 Feet Rd, Mysore Bank Colony, Banashankari 3rd Stage, Bengaluru, Karnataka 560050")
        .await;
    assert!(valid.is_valid(), "{}", valid.message());

    let wrong = validator
        .validate("2nd Phase, 80 Feet Rd, Mysore Bank Colony, Bengaluru, Karnataka 560095")
        .await;
    assert!(!wrong.is_valid());

    let vague = validator.validate("Colony, Bengaluru, Karnataka 560050").await;
    assert!(!vague.is_valid());
}
