use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::models::{IdCard, SubmissionRequest};

#[derive(Debug)]
pub enum TransportError {
    /// The request never produced a response.
    Network(String),
    /// The service answered with a non-2xx status.
    Status { status: StatusCode, message: Option<String> },
    /// A 2xx response whose body was not a card.
    Decode(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "Network error: {msg}"),
            TransportError::Status { status, message } => match message {
                Some(msg) => write!(f, "Card service returned {status}: {msg}"),
                None => write!(f, "Card service returned {status}"),
            },
            TransportError::Decode(msg) => write!(f, "Invalid card response: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Sends one card request to the card service.
#[async_trait]
pub trait CardTransport: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<IdCard, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CardTransport for HttpTransport {
    async fn submit(&self, request: &SubmissionRequest) -> Result<IdCard, TransportError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["error"].as_str().map(|s| s.to_string()));
            return Err(TransportError::Status { status, message });
        }

        resp.json::<IdCard>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
