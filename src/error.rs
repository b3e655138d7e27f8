//! Error type shared by the helpers

use thiserror::Error;

/// Faults raised while building a redirect
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {name:?}")]
    InvalidHeaderValue { name: String },
}

pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (HelperError::InvalidStatus(42), "invalid HTTP status code: 42"),
            (
                HelperError::InvalidHeaderName("a b".to_string()),
                "invalid header name: \"a b\"",
            ),
            (
                HelperError::InvalidHeaderValue {
                    name: "location".to_string(),
                },
                "invalid value for header \"location\"",
            ),
        ];
        for (err, expected) in cases {
            // every variant is a redirect input fault
            match &err {
                HelperError::InvalidStatus(_)
                | HelperError::InvalidHeaderName(_)
                | HelperError::InvalidHeaderValue { .. } => {}
            }
            assert_eq!(err.to_string(), expected);
        }
    }
}
