use crate::chat::{ChatApiResponse, OpenAiChatRequestBody};
use crate::config::ExecutorConfig;
use crate::constants::CHAT_COMPLETIONS_PATH;
use crate::error::ExecutorError;
use crate::utils::{build_chat_request, build_headers, create_spinner, preview};
use log::{error, info, warn};
use reqwest::{header::HeaderMap, Client, StatusCode};
use std::fmt;
use tokio::time::sleep;

/// Sends one prompt to the chat-completion endpoint, retrying with a fixed delay
/// until it gets an answer or runs out of attempts.
pub struct Executor {
    client: Client,
    headers: HeaderMap,
    url: String,
    config: ExecutorConfig,
}

enum AttemptFailure {
    Status { status: StatusCode, body: String },
    Transport(reqwest::Error),
    Malformed(String),
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, body } => write!(f, "API Error ({}): {}", status.as_u16(), body),
            Self::Transport(err) => write!(f, "Request failed: {}", err),
            Self::Malformed(reason) => write!(f, "Malformed response: {}", reason),
        }
    }
}

impl Executor {
    pub fn new(config: ExecutorConfig, api_key: &str) -> Result<Self, ExecutorError> {
        let headers = build_headers(api_key)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );

        Ok(Self {
            client,
            headers,
            url,
            config,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Always makes at least one attempt, even with `max_retries` set to zero.
    pub async fn execute(&self, prompt: &str) -> Result<String, ExecutorError> {
        let request_body = build_chat_request(prompt, &self.config);
        let max_attempts = self.config.max_retries.max(1);

        for attempt in 1..=max_attempts {
            info!("Attempt {} for question: {}...", attempt, preview(prompt));

            match self.attempt(&request_body).await {
                Ok(content) => return Ok(content),
                Err(AttemptFailure::Malformed(reason)) if !self.config.retry_malformed => {
                    error!("Malformed response, giving up on this question: {}", reason);
                    return Err(ExecutorError::MalformedResponse(reason));
                }
                Err(failure @ AttemptFailure::Status { .. }) => warn!("{}", failure),
                Err(failure) => error!("{}", failure),
            }

            if attempt < max_attempts {
                sleep(self.config.retry_delay).await;
            }
        }

        Err(ExecutorError::MaxRetriesExceeded {
            attempts: max_attempts,
        })
    }

    async fn attempt(&self, request_body: &OpenAiChatRequestBody) -> Result<String, AttemptFailure> {
        let spinner = self
            .config
            .show_spinner
            .then(|| create_spinner("green", "Waiting for response...".to_string()));

        let sent = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(request_body)
            .send()
            .await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let response = sent.map_err(AttemptFailure::Transport)?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptFailure::Status { status, body });
        }

        let body = response.text().await.map_err(AttemptFailure::Transport)?;
        let api_response: ChatApiResponse =
            serde_json::from_str(&body).map_err(|e| AttemptFailure::Malformed(e.to_string()))?;

        api_response
            .into_first_content()
            .ok_or_else(|| AttemptFailure::Malformed("response has no choices".to_string()))
    }
}
