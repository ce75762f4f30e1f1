// Text-generation service seam

pub mod error;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;

use async_trait::async_trait;

pub use error::ClientError;
pub use mock::MockGenerator;
#[cfg(feature = "openai")]
pub use openai::OpenAiClient;

/// A hosted model that completes a prompt with plain text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Settings needed to reach the generation service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credential: Option<String>,
    pub model: String,
    pub api_base: String,
}

/// Why generation cannot run in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    MissingCredential,
    /// Built without the `openai` feature
    Disabled,
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unavailable::MissingCredential => write!(f, "API key missing"),
            Unavailable::Disabled => write!(f, "client support not compiled in"),
        }
    }
}

/// Result of the one-time capability check
pub enum Availability {
    Ready(Box<dyn TextGenerator>),
    Unavailable(Unavailable),
}

impl std::fmt::Debug for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Ready(_) => f.write_str("Ready"),
            Availability::Unavailable(reason) => write!(f, "Unavailable({:?})", reason),
        }
    }
}

/// Decide once whether a generation client can be built
#[cfg(feature = "openai")]
pub fn connect(config: &ClientConfig) -> Result<Availability, ClientError> {
    let Some(credential) = config.credential.as_deref() else {
        return Ok(Availability::Unavailable(Unavailable::MissingCredential));
    };

    let client = OpenAiClient::new(credential, &config.model, &config.api_base)?;
    Ok(Availability::Ready(Box::new(client)))
}

/// Decide once whether a generation client can be built
#[cfg(not(feature = "openai"))]
pub fn connect(_config: &ClientConfig) -> Result<Availability, ClientError> {
    Ok(Availability::Unavailable(Unavailable::Disabled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(credential: Option<&str>) -> ClientConfig {
        ClientConfig {
            credential: credential.map(str::to_string),
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
        }
    }

    #[cfg(feature = "openai")]
    #[test]
    fn test_connect_without_credential() {
        let availability = connect(&config(None)).unwrap();
        assert!(matches!(
            availability,
            Availability::Unavailable(Unavailable::MissingCredential)
        ));
    }

    #[cfg(feature = "openai")]
    #[test]
    fn test_connect_with_credential() {
        let availability = connect(&config(Some("sk-test"))).unwrap();
        assert!(matches!(availability, Availability::Ready(_)));
    }

    #[cfg(not(feature = "openai"))]
    #[test]
    fn test_connect_disabled() {
        let availability = connect(&config(Some("sk-test"))).unwrap();
        assert!(matches!(
            availability,
            Availability::Unavailable(Unavailable::Disabled)
        ));
    }
}
