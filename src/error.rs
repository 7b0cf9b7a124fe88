//! Lookup errors.

/// Error returned by a lookup.
#[derive(Debug)]
pub enum LookupError {
    /// Connecting to or sending the request to the service failed.
    Transport(reqwest::Error),
    /// The connection failed while reading the response body.
    Body(reqwest::Error),
    /// The service answered 429 Too Many Requests.
    RateLimited,
    /// The service answered with a non-2xx status other than 429.
    UnexpectedStatus(u16),
    /// The response body could not be decoded.
    Decode(serde_json::Error),
    /// The HTTP client could not be built.
    Build(reqwest::Error),
}

/// Broad category of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network-level failure, including body read and client setup.
    Transport,
    /// HTTP 429.
    RateLimited,
    /// Any other failing HTTP status.
    UnexpectedStatus,
    /// Malformed response body.
    Decode,
}

impl LookupError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Transport(_) | LookupError::Body(_) | LookupError::Build(_) => {
                ErrorKind::Transport
            }
            LookupError::RateLimited => ErrorKind::RateLimited,
            LookupError::UnexpectedStatus(_) => ErrorKind::UnexpectedStatus,
            LookupError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status code behind this error, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::RateLimited => Some(429),
            LookupError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns true for HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LookupError::RateLimited)
    }

    /// Returns true if the transport reported a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            LookupError::Transport(e) | LookupError::Body(e) => e.is_timeout(),
            _ => false,
        }
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Transport(e) => write!(f, "HTTP error: {}", e),
            LookupError::Body(e) => write!(f, "Failed to read response body: {}", e),
            LookupError::RateLimited => write!(f, "Rate limited, try again later"),
            LookupError::UnexpectedStatus(code) => write!(f, "Unexpected status code {}", code),
            LookupError::Decode(e) => write!(f, "Failed to parse response: {}", e),
            LookupError::Build(e) => write!(f, "Failed to create HTTP client: {}", e),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Transport(e) | LookupError::Body(e) | LookupError::Build(e) => Some(e),
            LookupError::Decode(e) => Some(e),
            LookupError::RateLimited | LookupError::UnexpectedStatus(_) => None,
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn decode_error() -> LookupError {
        serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(LookupError::RateLimited.kind(), ErrorKind::RateLimited);
        assert_eq!(
            LookupError::UnexpectedStatus(500).kind(),
            ErrorKind::UnexpectedStatus
        );
        assert_eq!(decode_error().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(LookupError::RateLimited.status(), Some(429));
        assert_eq!(LookupError::UnexpectedStatus(503).status(), Some(503));
        assert_eq!(decode_error().status(), None);
    }

    #[test]
    fn test_rate_limited_helper() {
        assert!(LookupError::RateLimited.is_rate_limited());
        assert!(!LookupError::UnexpectedStatus(429).is_rate_limited());
        assert!(!decode_error().is_timeout());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LookupError::RateLimited.to_string(),
            "Rate limited, try again later"
        );
        assert_eq!(
            LookupError::UnexpectedStatus(404).to_string(),
            "Unexpected status code 404"
        );
        assert!(decode_error().to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_source() {
        assert!(decode_error().source().is_some());
        assert!(LookupError::RateLimited.source().is_none());
    }
}
