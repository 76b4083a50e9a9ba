//! One generate request/response cycle, plus the request tokens that keep
//! overlapping async work from overwriting newer state.
//!
//! DESIGN
//! ======
//! Every async operation takes a [`RequestToken`] when it starts and checks it
//! after each await. Starting a newer operation (or clearing the view) bumps
//! the counter, so an older completion finds its token stale and is dropped.
//! Overlapping requests are allowed; the most recently started one wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;

use crate::api::{GenerateRequest, GenerateResponse, GenerationService, ServiceError};
use crate::error::FlowError;
use crate::view::DiagramSource;

/// Identity of one async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source.
#[derive(Debug, Default)]
pub struct RequestTokens {
    current: Cell<u64>,
}

impl RequestTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new operation, invalidating every earlier token.
    pub fn issue(&self) -> RequestToken {
        let next = self.current.get() + 1;
        self.current.set(next);
        RequestToken(next)
    }

    /// Token of the latest operation, without invalidating it.
    #[must_use]
    pub fn latest(&self) -> RequestToken {
        RequestToken(self.current.get())
    }

    /// Invalidate every outstanding token.
    pub fn invalidate(&self) {
        self.issue();
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.get() == token.0
    }
}

/// Validates input, calls the service, and classifies the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationSession;

impl GenerationSession {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Trim `text`, rejecting blank input before any network traffic.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for empty or whitespace-only input.
    pub fn validate(text: &str) -> Result<&str, FlowError> {
        let trimmed = text.trim();
        if trimmed.is_empty() { Err(FlowError::Validation) } else { Ok(trimmed) }
    }

    /// Map a service outcome to a diagram source or a user-facing error.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Network`] for transport failures and malformed
    /// bodies (including a success without a diagram), or
    /// [`FlowError::Rejected`] when the service declines.
    pub fn interpret(outcome: Result<GenerateResponse, ServiceError>) -> Result<DiagramSource, FlowError> {
        let response = outcome.map_err(|e| FlowError::Network { detail: e.to_string() })?;
        if !response.success {
            return Err(FlowError::rejected(response.error));
        }
        match response.mermaid_code {
            Some(code) if !code.trim().is_empty() => Ok(DiagramSource::new(code)),
            _ => Err(FlowError::Network { detail: "success response without mermaid_code".to_owned() }),
        }
    }

    /// Issue exactly one request for already-validated `text` and await it.
    ///
    /// # Errors
    ///
    /// See [`GenerationSession::interpret`].
    pub async fn request<S: GenerationService>(&self, service: &S, text: &str) -> Result<DiagramSource, FlowError> {
        let outcome = service.generate(&GenerateRequest::new(text)).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "generation request failed");
        }
        let result = Self::interpret(outcome);
        if let Err(FlowError::Rejected { reason }) = &result {
            tracing::warn!(%reason, "generation rejected");
        }
        result
    }
}
