use std::fmt;

/// Failure of a single HTTP exchange, before the response body is
/// interpreted. Application-level failures (`success: false`) are not errors;
/// they arrive as a normal [`crate::models::ServerAck`].
#[derive(Debug)]
pub enum RequestError {
    /// The request never completed: connection, timeout, or HTTP status error.
    Transport(reqwest::Error),
    /// The response arrived but its body was not the expected JSON.
    Decode(reqwest::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(err) => write!(f, "request failed: {err}"),
            RequestError::Decode(err) => write!(f, "invalid response body: {err}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Transport(err) | RequestError::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err)
        } else {
            RequestError::Transport(err)
        }
    }
}
