//! Airtable Configuration
//!
//! Base identifier and API key are baked in at build time, the same way a
//! bundler injects its environment. Missing values resolve to empty strings
//! and surface as authentication failures on the first request.

/// Airtable base identifier, from `AIRTABLE_BASE_ID` at build time.
pub const AIRTABLE_BASE_ID: &str = match option_env!("AIRTABLE_BASE_ID") {
    Some(value) => value,
    None => "",
};

/// Airtable API key, from `AIRTABLE_API_KEY` at build time.
pub const AIRTABLE_API_KEY: &str = match option_env!("AIRTABLE_API_KEY") {
    Some(value) => value,
    None => "",
};

/// Base endpoint for all table requests.
pub fn base_url() -> String {
    format!("https://api.airtable.com/v0/{}", AIRTABLE_BASE_ID)
}
