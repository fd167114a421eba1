use crate::onvif_requests::Operation;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The response body is not well-formed XML.
    #[error("response is not well-formed XML: {0}")]
    Parse(String),
    #[error("element not found: {path}")]
    MissingElement { path: String },
    #[error("attribute {attribute} not found on {path}")]
    MissingAttribute { path: String, attribute: String },
    #[error("invalid number {value:?} at {path}")]
    InvalidNumber { path: String, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("http client build failed: {0}")]
    Build(String),
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("{operation} failed with HTTP {status}")]
    HttpStatus { operation: Operation, status: u16 },
    #[error("{operation} transport failure: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },
}

impl ClientError {
    pub fn operation(&self) -> Operation {
        match self {
            ClientError::HttpStatus { operation, .. } | ClientError::Transport { operation, .. } => {
                *operation
            }
        }
    }
}
