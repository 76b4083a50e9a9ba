//! HTTP implementation of the generation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are decoded whatever the HTTP status: the service reports
//! rejections as `{ success: false, error }` with a 4xx/5xx status, and that
//! reason must reach the error view. Only an unreachable server or an
//! undecodable body becomes a `ServiceError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use flownook::StudioConfig;
use flownook::api::{ExamplesResponse, GenerateRequest, GenerateResponse, GenerationService, ServiceError};

/// Generation service backed by the studio's REST endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpService {
    generate_url: String,
    examples_url: String,
}

impl HttpService {
    pub fn from_config(config: &StudioConfig) -> Self {
        Self { generate_url: config.generate_endpoint(), examples_url: config.examples_endpoint() }
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    pub fn examples_url(&self) -> &str {
        &self.examples_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(url: &str, detail: &str) -> String {
    format!("request to {url} failed: {detail}")
}

#[cfg(any(test, feature = "hydrate"))]
fn body_read_failed_message(status: u16, detail: &str) -> String {
    format!("could not read body (status {status}): {detail}")
}

impl GenerationService for HttpService {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.generate_url)
                .json(request)
                .map_err(|e| ServiceError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ServiceError::Transport(transport_failed_message(&self.generate_url, &e.to_string())))?;
            let status = resp.status();
            let body =
                resp.text().await.map_err(|e| ServiceError::Transport(body_read_failed_message(status, &e.to_string())))?;
            flownook::api::decode_generate(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ServiceError::Transport("not available on server".to_owned()))
        }
    }

    async fn examples(&self) -> Result<ExamplesResponse, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.examples_url)
                .send()
                .await
                .map_err(|e| ServiceError::Transport(transport_failed_message(&self.examples_url, &e.to_string())))?;
            let status = resp.status();
            let body =
                resp.text().await.map_err(|e| ServiceError::Transport(body_read_failed_message(status, &e.to_string())))?;
            flownook::api::decode_examples(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ServiceError::Transport("not available on server".to_owned()))
        }
    }
}
