//! Wire types for the remote generation service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST {api_base}/generate` takes `{ text }` and answers
//! `{ success, mermaid_code?, error? }`; `GET {api_base}/examples` answers
//! `{ success, examples: [{ title, description }] }`. The service may send
//! the body with a non-2xx status (e.g. a 400 carrying only `error`), so
//! implementations decode the body regardless of status and let
//! [`crate::session::GenerationSession`] classify it.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Body of a generate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of a generate response. A missing `success` reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mermaid_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    #[must_use]
    pub fn ok(code: impl Into<String>) -> Self {
        Self { success: true, mermaid_code: Some(code.into()), ..Self::default() }
    }

    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self { success: false, error: Some(reason.into()), ..Self::default() }
    }
}

/// One canned process description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
}

impl Example {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// Body of an examples response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// Failure to obtain a decodable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

/// The remote text-to-diagram service.
pub trait GenerationService {
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or an undecodable body.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ServiceError>;

    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or an undecodable body.
    async fn examples(&self) -> Result<ExamplesResponse, ServiceError>;
}

/// Decode a response body. Shared by HTTP implementations.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if `body` is not the expected JSON.
pub fn decode_generate(body: &str) -> Result<GenerateResponse, ServiceError> {
    Ok(serde_json::from_str(body)?)
}

/// # Errors
///
/// Returns [`ServiceError::Malformed`] if `body` is not the expected JSON.
pub fn decode_examples(body: &str) -> Result<ExamplesResponse, ServiceError> {
    Ok(serde_json::from_str(body)?)
}
