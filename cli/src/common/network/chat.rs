//! # Neurolixir Remote Chat Client (`common::network::chat`)
//!
//! File: cli/src/common/network/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A single adapter for OpenAI-compatible chat completion endpoints. The
//! provider is chosen by a `ChatEndpoint` value (OpenAI, DeepSeek or an
//! arbitrary base URL); the request shape and response handling are shared.
//!
//! ## Request Flow
//!
//! 1. `POST {base_url}/chat/completions` with bearer auth.
//! 2. Body: `model`, `temperature`, and `[system, user]` messages.
//! 3. The reply is `choices[0].message.content`.
//!
//! Transport failures, non-success statuses and replies without that field
//! all become `NeurolixirError::RemoteChat`. There is no retry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = ChatClient::new(ChatEndpoint::DeepSeek, api_key)?;
//! let reply = client
//!     .send_chat(&ChatRequest::new("What's your name?").with_model("deepseek-chat"))
//!     .await?;
//! ```
//!
use crate::core::error::{NeurolixirError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEEPSEEK_DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are my friend";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Which chat service to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEndpoint {
    OpenAi,
    DeepSeek,
    Custom { base_url: String },
}

impl ChatEndpoint {
    pub fn base_url(&self) -> &str {
        match self {
            ChatEndpoint::OpenAi => OPENAI_BASE_URL,
            ChatEndpoint::DeepSeek => DEEPSEEK_BASE_URL,
            ChatEndpoint::Custom { base_url } => base_url,
        }
    }

    /// Full URL of the chat completions route.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url().trim_end_matches('/'))
    }
}

impl fmt::Display for ChatEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatEndpoint::OpenAi => write!(f, "openai"),
            ChatEndpoint::DeepSeek => write!(f, "deepseek"),
            ChatEndpoint::Custom { base_url } => write!(f, "url({})", base_url),
        }
    }
}

/// One chat turn: a system prompt plus the user's message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub model: String,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_message: user_message.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    fn body(&self) -> CompletionBody<'_> {
        CompletionBody {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: &self.user_message,
                },
            ],
        }
    }
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Extracts `choices[0].message.content` from a completion response body.
fn parse_reply(body: &str) -> Result<String> {
    let reply: CompletionReply = serde_json::from_str(body).map_err(|e| {
        NeurolixirError::RemoteChat(format!("malformed completion response: {}", e))
    })?;
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            NeurolixirError::RemoteChat("completion response has no message content".to_string())
                .into()
        })
}

/// OpenAI-compatible chat client bound to one endpoint and API key.
#[derive(Debug, Clone)]
pub struct ChatClient {
    endpoint: ChatEndpoint,
    api_key: String,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(endpoint: ChatEndpoint, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NeurolixirError::RemoteChat(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            endpoint,
            api_key: api_key.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &ChatEndpoint {
        &self.endpoint
    }

    /// Sends one chat turn and returns the assistant's reply text.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<String> {
        let url = self.endpoint.completions_url();
        info!("Sending chat request to {} (model {})", self.endpoint, request.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request.body())
            .send()
            .await
            .map_err(|e| NeurolixirError::RemoteChat(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            NeurolixirError::RemoteChat(format!("failed to read response from {}: {}", url, e))
        })?;

        if !status.is_success() {
            anyhow::bail!(NeurolixirError::RemoteChat(format!(
                "{} returned {}: {}",
                self.endpoint, status, text
            )));
        }

        debug!("Received {} bytes from {}", text.len(), url);
        parse_reply(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::kind_of;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            ChatEndpoint::OpenAi.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            ChatEndpoint::DeepSeek.completions_url(),
            "https://api.deepseek.com/chat/completions"
        );
        let custom = ChatEndpoint::Custom {
            base_url: "http://localhost:8080/v1/".to_string(),
        };
        assert_eq!(custom.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest::new("What's your name?")
            .with_model("deepseek-chat")
            .with_temperature(0.5)
            .with_system_prompt("Be brief");
        let body = serde_json::to_value(request.body()).unwrap();

        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "Be brief");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "What's your name?");
    }

    #[test]
    fn test_request_defaults() {
        let request = ChatRequest::new("hi");
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_parse_reply_extracts_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"I'm Neurolixir"}},
                       {"message":{"role":"assistant","content":"ignored"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "I'm Neurolixir");
    }

    #[test]
    fn test_parse_reply_errors_are_remote_chat() {
        for body in ["not json", r#"{"choices":[]}"#, r#"{"choices":[{"message":{}}]}"#] {
            let err = parse_reply(body).unwrap_err();
            assert!(
                matches!(kind_of(&err), Some(NeurolixirError::RemoteChat(_))),
                "body {:?} gave {:?}",
                body,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_remote_chat_error() {
        let client = ChatClient::new(
            ChatEndpoint::Custom {
                base_url: "http://127.0.0.1:9".to_string(),
            },
            "sk-test",
        )
        .unwrap();
        let err = client.send_chat(&ChatRequest::new("hi")).await.unwrap_err();
        assert!(matches!(kind_of(&err), Some(NeurolixirError::RemoteChat(_))));
    }
}
