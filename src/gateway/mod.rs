use log::{ info, warn };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };
use std::time::Duration;
use thiserror::Error;

use crate::cli::Args;
use crate::models::chat::Message;

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const COMPLETIONS_ROUTE: &str = "/openai/v1/chat/completions";

/// Ships in .env templates; a key equal to this was never configured by a user.
const PLACEHOLDER_API_KEY: &str = "your_groq_api_key_here";

const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Always respond in English, regardless of \
     the language used in the question. Provide clear, accurate, and \
     well-formatted answers.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid API key format: {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Boundary to the hosted completion API. Callers treat every error as a
/// signal to answer from the canned-response engine instead.
pub struct CompletionGateway {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    messages: Vec<WireMessage>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: WireMessage,
}

impl CompletionGateway {
    pub fn new(
        api_key: &str,
        model: Option<String>,
        base_url: Option<String>
    ) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", api_key))?);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Returns `None` when no usable credential is configured; the server
    /// then never attempts the network and answers from canned responses.
    pub fn from_args(args: &Args) -> Result<Option<Self>, GatewayError> {
        let api_key = args.groq_api_key.trim();
        if api_key.is_empty() || api_key == PLACEHOLDER_API_KEY {
            return Ok(None);
        }
        let gateway = Self::new(api_key, args.groq_model.clone(), args.groq_base_url.clone())?;
        info!("Completion gateway configured: Model={}, BaseURL={}", gateway.model, gateway.base_url);
        Ok(Some(gateway))
    }

    /// Boot-time construction. Gateway trouble never blocks replies, so a
    /// malformed credential disables the gateway with a warning instead of
    /// failing startup.
    pub fn initialize(args: &Args) -> Option<Self> {
        match Self::from_args(args) {
            Ok(gateway) => gateway,
            Err(e) => {
                warn!("Completion gateway disabled: {}", e);
                None
            }
        }
    }

    /// Single synchronous completion round-trip over the full history, with
    /// the fixed system instruction prepended.
    pub async fn complete(&self, history: &[Message]) -> Result<String, GatewayError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), COMPLETIONS_ROUTE);

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(WireMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        });
        for msg in history {
            messages.push(WireMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content.clone(),
            });
        }

        let req = CompletionRequest {
            messages,
            model: self.model.clone(),
            temperature: 0.7,
            max_tokens: 2048,
        };

        let resp = self.http
            .post(&url)
            .json(&req)
            .send().await?
            .error_for_status()?
            .json::<CompletionResponse>().await?;

        let content = resp.choices
            .into_iter()
            .next()
            .ok_or(GatewayError::EmptyResponse)?
            .message.content;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_with_key(key: &str) -> Args {
        Args::parse_from(["mockingbird", "--groq-api-key", key])
    }

    #[test]
    fn missing_credential_disables_gateway() {
        let gateway = CompletionGateway::from_args(&args_with_key("")).unwrap();
        assert!(gateway.is_none());
    }

    #[test]
    fn placeholder_credential_disables_gateway() {
        let gateway = CompletionGateway::from_args(&args_with_key(PLACEHOLDER_API_KEY)).unwrap();
        assert!(gateway.is_none());
    }

    #[test]
    fn whitespace_credential_disables_gateway() {
        let gateway = CompletionGateway::from_args(&args_with_key("   ")).unwrap();
        assert!(gateway.is_none());
    }

    #[test]
    fn real_credential_enables_gateway() {
        let gateway = CompletionGateway::from_args(&args_with_key("gsk_test_key")).unwrap();
        assert!(gateway.is_some());
    }

    #[test]
    fn malformed_credential_disables_gateway_instead_of_failing_boot() {
        // A header-unsafe key is a construction error from from_args, but
        // boot-time initialization recovers by running without the gateway.
        let args = args_with_key("gsk\nbroken");
        assert!(matches!(
            CompletionGateway::from_args(&args),
            Err(GatewayError::InvalidKey(_))
        ));
        assert!(CompletionGateway::initialize(&args).is_none());
    }

    #[test]
    fn unset_model_and_base_url_fall_back_to_defaults() {
        let gateway = CompletionGateway::new("gsk_test_key", None, None).unwrap();
        assert_eq!(gateway.model, DEFAULT_MODEL);
        assert_eq!(gateway.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_gateway_error() {
        let gateway = CompletionGateway::new(
            "gsk_test_key",
            None,
            Some("http://127.0.0.1:9".to_string())
        ).unwrap();
        let result = gateway.complete(&[]).await;
        assert!(matches!(result, Err(GatewayError::Http(_))));
    }
}
