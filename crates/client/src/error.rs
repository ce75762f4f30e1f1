use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[cfg(feature = "openai")]
    Http(reqwest::Error),
    /// The service answered with a non-success status
    Api { status: u16, message: String },
    /// The credential cannot be sent as a header
    InvalidCredential,
    Mock(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "openai")]
            ClientError::Http(err) => write!(f, "HTTP error: {}", err),
            ClientError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ClientError::InvalidCredential => write!(f, "API key contains invalid characters"),
            ClientError::Mock(msg) => write!(f, "Mock failure: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "openai")]
            ClientError::Http(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "openai")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}
