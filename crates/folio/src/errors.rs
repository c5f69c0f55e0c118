use thiserror::Error;

/// Classified outcome of a failed exchange with the assistant API.
///
/// Every failure the client can produce maps onto exactly one of these
/// variants; callers never see a raw transport error.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("API error: {code} - {body}")]
    ApiStatus { code: u16, body: String },

    #[error("Network error. Please check your connection.")]
    NetworkUnavailable,

    #[error("{0}")]
    Unknown(String),
}

impl ClientError {
    /// Wrap an arbitrary failure, keeping its message when there is one.
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            ClientError::Unknown("An unexpected error occurred".to_string())
        } else {
            ClientError::Unknown(message)
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ClientError::Timeout.to_string(),
            "Request timed out. Please try again."
        );
        assert_eq!(
            ClientError::NetworkUnavailable.to_string(),
            "Network error. Please check your connection."
        );
        assert_eq!(
            ClientError::ApiStatus {
                code: 500,
                body: "server error".to_string()
            }
            .to_string(),
            "API error: 500 - server error"
        );
    }

    #[test]
    fn test_unknown_falls_back_to_generic_message() {
        assert_eq!(
            ClientError::unknown("").to_string(),
            "An unexpected error occurred"
        );
        assert_eq!(ClientError::unknown("boom").to_string(), "boom");
    }
}
