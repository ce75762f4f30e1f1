// OpenAI Responses API client

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::{ClientError, TextGenerator};

pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct ResponseRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    output: Vec<OutputItem>,
    #[serde(default)]
    output_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ResponseBody {
    /// Join every `output_text` part, falling back to the top-level convenience field
    pub(crate) fn text(&self) -> String {
        let parts: Vec<&str> = self
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect();

        if parts.is_empty() {
            self.output_text.clone().unwrap_or_default().trim().to_string()
        } else {
            parts.concat().trim().to_string()
        }
    }
}

/// Map a non-success response to an error, preferring the service's own message
fn api_error(status: u16, body: &str) -> ClientError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    ClientError::Api { status, message }
}

impl OpenAiClient {
    /// Create a client that sends `credential` as a bearer token.
    ///
    /// No request timeout is configured; the transport defaults apply.
    pub fn new(credential: &str, model: &str, api_base: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", credential))
                .map_err(|_| ClientError::InvalidCredential)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            model: model.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.api_base)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let url = self.endpoint();
        tracing::debug!(model = %self.model, %url, "Sending generation request");

        let response = self
            .client
            .post(&url)
            .json(&ResponseRequest {
                model: &self.model,
                input: prompt,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let body: ResponseBody = response.json().await?;
        Ok(body.text())
    }
}
