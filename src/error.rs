//! API Error Taxonomy
//!
//! Every failure leaving the Airtable client is one of these kinds, carrying
//! a message that names the offending table or field. No raw transport error
//! escapes the client layer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Unauthorized (HTTP 401) - bad or missing API key.
    #[error("{0}")]
    Authentication(String),

    /// Table or record missing (HTTP 404), or a required record is absent.
    #[error("{0}")]
    NotFound(String),

    /// A required field is missing from an otherwise-successful response.
    #[error("{0}")]
    Validation(String),

    /// Any other transport or decode failure.
    #[error("{0}")]
    Transport(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_carried_message() {
        let err = ApiError::NotFound("Audit item not found".to_string());
        assert_eq!(err.to_string(), "Audit item not found");

        let err = ApiError::Validation(
            "Score_Global_Sur_10 field not found in GLOBAL_SCORE table".to_string(),
        );
        assert!(err.to_string().contains("Score_Global_Sur_10"));
    }
}
