use crate::config::Target;
use crate::error::TransportError;
use crate::soap::CONTENT_TYPE;
use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP POST of a SOAP payload to a host-relative path on the camera.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, payload: String) -> Result<TransportResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    target: Target,
}

impl HttpTransport {
    pub fn new(target: Target) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(target.timeout())
            .build()
            .map_err(|err| TransportError::Build(err.to_string()))?;
        Ok(Self { client, target })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, payload: String) -> Result<TransportResponse, TransportError> {
        let url = self.target.url(path);
        log::debug!("POST {} ({} bytes)", url, payload.len());
        let response = self
            .client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(|err| TransportError::Request {
                url: url.clone(),
                reason: err.to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Request {
                url: url.clone(),
                reason: err.to_string(),
            })?;
        log::debug!("{} -> HTTP {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}
