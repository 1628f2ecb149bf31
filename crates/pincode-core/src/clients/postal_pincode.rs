//! India Post PIN code directory client

use crate::config::PostalApiConfig;
use crate::constants::LOOKUP_SUCCESS_STATUS;
use crate::error::{PincodeError, Result};
use crate::types::{PinCode, PincodeLookupResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};

/// Source of the area names registered under a PIN code.
///
/// An `Err` covers every way the lookup can fail, including a PIN code the
/// directory does not know. Callers decide whether that is fatal.
#[async_trait]
pub trait PincodeLookup: Send + Sync {
    /// Post office names for the PIN code, in directory order
    async fn area_names(&self, pincode: &PinCode) -> Result<Vec<String>>;
}

pub struct PostalPincodeClient {
    base_url: String,
    http_client: HttpClient,
}

impl PostalPincodeClient {
    /// Uses the transport's default timeouts; lookups are never retried.
    pub fn new(config: PostalApiConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("pincode-validator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn lookup_url(&self, pincode: &PinCode) -> String {
        format!("{}/pincode/{}", self.base_url, pincode)
    }
}

#[async_trait]
impl PincodeLookup for PostalPincodeClient {
    async fn area_names(&self, pincode: &PinCode) -> Result<Vec<String>> {
        let url = self.lookup_url(pincode);
        debug!("Looking up PIN code {} at {}", pincode, url);

        let response = self.http_client.get(&url).send().await?;

        check_status(response.status())?;

        let body = response.text().await?;
        let names = parse_lookup_response(&body)?;
        debug!("PIN code {} has {} post office(s)", pincode, names.len());

        Ok(names)
    }
}

/// Only a plain 200 carries a usable directory payload
fn check_status(status: StatusCode) -> Result<()> {
    if status != StatusCode::OK {
        return Err(PincodeError::ServiceUnavailable(format!(
            "PIN code directory returned HTTP {}",
            status
        )));
    }
    Ok(())
}

/// Extract post office names from a raw directory response body.
///
/// Only the first array element is inspected. Anything but a `"Success"`
/// status with at least one post office is an error.
pub fn parse_lookup_response(body: &str) -> Result<Vec<String>> {
    let entries: Vec<PincodeLookupResponse> = serde_json::from_str(body)?;

    let first = entries.into_iter().next()
        .ok_or_else(|| PincodeError::Deserialization("Empty PIN code lookup response".to_string()))?;

    if first.status != LOOKUP_SUCCESS_STATUS {
        return Err(PincodeError::NotFound(format!(
            "PIN code lookup status '{}': {}",
            first.status,
            first.message.as_deref().unwrap_or("no message")
        )));
    }

    let names: Vec<String> = first.post_office
        .unwrap_or_default()
        .into_iter()
        .map(|office| office.name)
        .collect();

    if names.is_empty() {
        return Err(PincodeError::NotFound("No post offices listed for PIN code".to_string()));
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_keeps_directory_order() {
        // Trimmed copy of a real response for 560050
        let body = json!([{
            "Message": "Number of pincode(s) found:3",
            "Status": "Success",
            "PostOffice": [
                {
                    "Name": "Banashankari III Stage",
                    "BranchType": "Sub Post Office",
                    "DeliveryStatus": "Delivery",
                    "District": "Bangalore",
                    "State": "Karnataka",
                    "Pincode": "560050"
                },
                {
                    "Name": "Hosakerehalli",
                    "BranchType": "Sub Post Office",
                    "District": "Bangalore",
                    "State": "Karnataka",
                    "Pincode": "560050"
                },
                { "Name": "Kathriguppe" }
            ]
        }]).to_string();

        let names = parse_lookup_response(&body).unwrap();
        assert_eq!(names, vec!["Banashankari III Stage", "Hosakerehalli", "Kathriguppe"]);
    }

    #[test]
    fn test_parse_error_status_is_not_found() {
        let body = json!([{
            "Message": "No records found",
            "Status": "Error",
            "PostOffice": null
        }]).to_string();

        let err = parse_lookup_response(&body).unwrap_err();
        assert!(matches!(err, PincodeError::NotFound(_)), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_success_without_offices_is_not_found() {
        let body = json!([{ "Status": "Success", "PostOffice": null }]).to_string();
        assert!(matches!(parse_lookup_response(&body), Err(PincodeError::NotFound(_))));

        let body = json!([{ "Status": "Success", "PostOffice": [] }]).to_string();
        assert!(matches!(parse_lookup_response(&body), Err(PincodeError::NotFound(_))));
    }

    #[test]
    fn test_parse_empty_array_fails() {
        assert!(matches!(
            parse_lookup_response("[]"),
            Err(PincodeError::Deserialization(_))
        ));
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        assert!(matches!(
            parse_lookup_response("<html>Bad Gateway</html>"),
            Err(PincodeError::Json(_))
        ));
    }

    #[test]
    fn test_only_http_200_is_accepted() {
        assert!(check_status(StatusCode::OK).is_ok());
        for status in [StatusCode::NO_CONTENT, StatusCode::ACCEPTED, StatusCode::NOT_FOUND, StatusCode::BAD_GATEWAY] {
            assert!(
                matches!(check_status(status), Err(PincodeError::ServiceUnavailable(_))),
                "HTTP {} should be rejected",
                status
            );
        }
    }

    #[test]
    fn test_lookup_url_strips_trailing_slash() {
        let client = PostalPincodeClient::new(PostalApiConfig {
            base_url: "http://localhost:8080/".to_string(),
        }).unwrap();
        let pin = PinCode::parse("560095").unwrap();

        assert_eq!(client.lookup_url(&pin), "http://localhost:8080/pincode/560095");
    }
}
