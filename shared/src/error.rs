use crate::fields::Field;
use thiserror::Error;

/// Why a prediction submission failed.
///
/// Every variant reaches the user through the same error panel; the variants
/// only exist so callers can tell the causes apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("invalid value {value:?} for field {field}")]
    InvalidField { field: Field, value: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    Network(String),

    #[error("HTTP error! status: {code}")]
    HttpStatus { code: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        format!(
            "Failed to get prediction. Please make sure the backend is running. Error: {}",
            self
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_names_the_code() {
        let err = SubmitError::HttpStatus {
            code: 500,
            detail: Some("Model not loaded".into()),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert!(err.user_message().contains("status: 500"));
    }

    #[test]
    fn user_message_wraps_underlying_error() {
        let err = SubmitError::Network("TypeError: Failed to fetch".into());
        assert_eq!(
            err.user_message(),
            "Failed to get prediction. Please make sure the backend is running. \
             Error: TypeError: Failed to fetch"
        );
    }

    #[test]
    fn invalid_field_names_the_control() {
        let err = SubmitError::InvalidField {
            field: Field::MainMeals,
            value: "two".into(),
        };
        assert_eq!(err.to_string(), "invalid value \"two\" for field mainMeals");
    }
}
