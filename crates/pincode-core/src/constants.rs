/// Validation policy constants

/// Minimum weighted-ratio score (exclusive) for an area to count as a match
pub const SIMILARITY_THRESHOLD: u8 = 80;

/// Public India Post PIN code directory
pub const DEFAULT_POSTAL_API_BASE_URL: &str = "https://api.postalpincode.in";

/// Status string the directory reports for a known PIN code
pub const LOOKUP_SUCCESS_STATUS: &str = "Success";

/// Addresses validated when none are supplied on the command line or in the config file
pub const SAMPLE_ADDRESSES: [&str; 3] = [
    "2nd Phase, 374/B, 80 Feet Rd, Mysore Bank Colony, Banashankari 3rd Stage, Bengaluru, Karnataka 560050",
    "2nd Phase, 80 Feet Rd, Mysore Bank Colony, Bengaluru, Karnataka 560095",
    "Colony, Bengaluru, Karnataka 560050",
];
